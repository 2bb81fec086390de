//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { catalog, force } => init_config(&catalog, force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.blank();
    ctx.output.info("[catalog]");
    ctx.output.kv("path", &ctx.config.catalog.path);

    ctx.output.blank();
    ctx.output.info("[cart]");
    ctx.output.kv("path", &ctx.config.cart.path);

    let listing = &ctx.config.listing;
    ctx.output.blank();
    ctx.output.info("[listing]");
    ctx.output
        .kv("catalog_page_size", &listing.catalog_page_size.to_string());
    ctx.output
        .kv("account_page_size", &listing.account_page_size.to_string());
    ctx.output
        .kv("catalog_window", &format!("{:?}", listing.catalog_window));
    ctx.output
        .kv("account_window", &format!("{:?}", listing.account_window));

    ctx.output.blank();
    ctx.output.info("[log]");
    ctx.output.kv("level", ctx.config.log.level.as_directive());
    ctx.output.kv("format", &format!("{:?}", ctx.config.log.format).to_lowercase());

    Ok(())
}

fn init_config(catalog: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("sprout.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config(catalog))?;

    if !ctx.resolve_path(catalog).exists() {
        ctx.output
            .warn(&format!("Catalog file not found yet: {}", catalog));
    }
    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = ctx.config.errors();
    let mut warnings = ctx.config.warnings();

    if !ctx.resolve_path(&ctx.config.catalog.path).exists() {
        warnings.push(format!(
            "catalog.path '{}' does not exist; listings will be empty",
            ctx.config.catalog.path
        ));
    }

    // Print results
    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
