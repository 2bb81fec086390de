//! Sprout CLI - browse the catalog and manage carts from the terminal.
//!
//! Commands:
//! - `sprout browse` - List catalog products with search, filters and sorting
//! - `sprout show` - Show one product
//! - `sprout cart` - Add, remove, check and view cart items
//! - `sprout config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, CartArgs, ConfigArgs, ShowArgs};
use sprout_observability::LogLevel;

/// Sprout CLI - Browse the sprout catalog and manage shopping carts
#[derive(Parser)]
#[command(name = "sprout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Browse(BrowseArgs),

    /// Show a single product
    Show(ShowArgs),

    /// Manage a shopper's cart
    Cart(CartArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    init_tracing(ctx.config.log.level, cli.verbose);

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(level: LogLevel, verbose: bool) {
    let default = if verbose {
        LogLevel::Debug.as_directive()
    } else {
        level.as_directive()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
