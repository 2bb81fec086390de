//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use sprout_commerce::catalog::Catalog;
use sprout_observability::{LogLevel, RequestId, StructuredLogger};

use crate::config::SproutConfig;
use crate::output::Output;
use crate::store::JsonFileCartStore;

const CONFIG_NAMES: [&str; 3] = ["sprout.toml", ".sprout.toml", "sprout.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: SproutConfig,
    /// Where the configuration came from, if not defaults.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Id shared by every log line of this invocation.
    pub request_id: RequestId,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (SproutConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd)? {
                Some((config, path)) => (config, Some(path)),
                None => (SproutConfig::default(), None),
            }
        };

        match &config_path {
            Some(path) => output.debug(&format!("Using config: {}", path.display())),
            None => output.debug("No config file found, using defaults"),
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            request_id: RequestId::generate(),
        })
    }

    /// Find config file in directory tree.
    ///
    /// The nearest config file wins. A file that exists but does not parse
    /// is an error, not a reason to keep looking.
    fn find_config(start: &Path) -> Result<Option<(SproutConfig, PathBuf)>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    let config = SproutConfig::load(&config_path.to_string_lossy())?;
                    return Ok(Some((config, config_path)));
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Fail if the listing settings cannot drive a listing.
    pub fn ensure_valid(&self) -> Result<()> {
        if let Some(first) = self.config.errors().into_iter().next() {
            bail!("Invalid configuration: {} (run `sprout config validate`)", first);
        }
        Ok(())
    }

    /// Logger for one command.
    pub fn logger(&self, operation: &str) -> StructuredLogger {
        let min_level = if self.output.is_verbose() {
            LogLevel::Debug
        } else {
            self.config.log.level
        };

        StructuredLogger::new(self.request_id.clone())
            .with_component("sprout-cli")
            .with_operation(operation)
            .with_min_level(min_level)
            .with_format(self.config.log.format)
    }

    /// Load the product catalog.
    ///
    /// A missing or malformed catalog file is logged and yields an empty
    /// catalog, so listings render as "no products" instead of failing.
    pub fn load_catalog(&self, logger: &StructuredLogger) -> Catalog {
        let path = self.resolve_path(&self.config.catalog.path);

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                logger
                    .error_builder("catalog file unreadable")
                    .field("path", path.display().to_string())
                    .field("error", e.to_string())
                    .emit();
                return Catalog::default();
            }
        };

        match Catalog::from_json_str(&text) {
            Ok(catalog) => {
                logger
                    .debug_builder("catalog loaded")
                    .field("path", path.display().to_string())
                    .field_u64("products", catalog.len() as u64)
                    .emit();
                catalog
            }
            Err(e) => {
                logger
                    .error_builder("catalog file malformed")
                    .field("path", path.display().to_string())
                    .field("error", e.to_string())
                    .emit();
                Catalog::default()
            }
        }
    }

    /// Open the configured cart store.
    pub fn open_cart_store(&self) -> Result<JsonFileCartStore> {
        let path = self.resolve_path(&self.config.cart.path);
        JsonFileCartStore::open(&path)
            .with_context(|| format!("Failed to open cart store: {}", path.display()))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
