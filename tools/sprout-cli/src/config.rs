//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sprout_commerce::search::{ListingPreset, NavWindow};
use sprout_observability::{LogFormat, LogLevel};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SproutConfig {
    /// Product catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Cart storage.
    #[serde(default)]
    pub cart: CartConfig,

    /// Page sizes and navigation windows.
    #[serde(default)]
    pub listing: ListingConfig,

    /// Logging.
    #[serde(default)]
    pub log: LogConfig,
}

impl SproutConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            Self::from_json_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Problems that make the listing settings unusable.
    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let listing = &self.listing;

        if listing.catalog_page_size == 0 {
            errors.push("listing.catalog_page_size must be at least 1".to_string());
        }
        if listing.account_page_size == 0 {
            errors.push("listing.account_page_size must be at least 1".to_string());
        }
        if !listing.catalog_window.is_valid() {
            errors.push("listing.catalog_window edges must be at least 1".to_string());
        }
        if !listing.account_window.is_valid() {
            errors.push("listing.account_window edges must be at least 1".to_string());
        }

        errors
    }

    /// Settings that work but are probably not what was meant.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.catalog.path.ends_with(".json") {
            warnings.push(format!(
                "catalog.path '{}' is not a .json file",
                self.catalog.path
            ));
        }
        if self.listing.catalog_page_size > 100 {
            warnings.push(format!(
                "listing.catalog_page_size {} is unusually large",
                self.listing.catalog_page_size
            ));
        }

        warnings
    }
}

/// Catalog source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the products JSON document.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "products.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Cart storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartConfig {
    /// Path to the carts JSON file. Created on first write.
    #[serde(default = "default_cart_path")]
    pub path: String,
}

fn default_cart_path() -> String {
    ".sprout/carts.json".to_string()
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            path: default_cart_path(),
        }
    }
}

/// Listing presets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_catalog_page_size")]
    pub catalog_page_size: usize,

    #[serde(default = "default_account_page_size")]
    pub account_page_size: usize,

    #[serde(default = "default_catalog_window")]
    pub catalog_window: NavWindow,

    #[serde(default = "default_account_window")]
    pub account_window: NavWindow,
}

fn default_catalog_page_size() -> usize {
    ListingPreset::CATALOG.page_size
}

fn default_account_page_size() -> usize {
    ListingPreset::ACCOUNT.page_size
}

fn default_catalog_window() -> NavWindow {
    ListingPreset::CATALOG.window
}

fn default_account_window() -> NavWindow {
    ListingPreset::ACCOUNT.window
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            catalog_page_size: default_catalog_page_size(),
            account_page_size: default_account_page_size(),
            catalog_window: default_catalog_window(),
            account_window: default_account_window(),
        }
    }
}

impl ListingConfig {
    /// Preset for the catalog listing.
    pub fn catalog_preset(&self) -> ListingPreset {
        ListingPreset {
            page_size: self.catalog_page_size,
            window: self.catalog_window,
        }
    }

    /// Preset for the account cart view.
    pub fn account_preset(&self) -> ListingPreset {
        ListingPreset {
            page_size: self.account_page_size,
            window: self.account_window,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level, overridden by `RUST_LOG` and `--verbose`.
    #[serde(default)]
    pub level: LogLevel,

    /// Structured log line format.
    #[serde(default)]
    pub format: LogFormat,
}

/// Generate a default sprout.toml config file.
pub fn generate_default_config(catalog_path: &str) -> String {
    format!(
        r#"# Sprout storefront configuration

[catalog]
path = "{catalog_path}"

[cart]
path = ".sprout/carts.json"

[listing]
catalog_page_size = 25
account_page_size = 3
catalog_window = {{ left_edge = 1, right_edge = 1, left_current = 3, right_current = 3 }}
account_window = {{ left_edge = 1, right_edge = 1, left_current = 2, right_current = 2 }}

[log]
level = "info"
format = "human"
"#,
        catalog_path = catalog_path
    )
}
