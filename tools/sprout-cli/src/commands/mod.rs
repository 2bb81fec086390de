//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod config;
pub mod show;

use clap::{Args, Subcommand};
use sprout_commerce::cart::Shopper;
use sprout_commerce::search::{ListingQuery, SortKey};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Case-insensitive text to look for in product names.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show these styles (repeatable).
    #[arg(long)]
    pub style: Vec<String>,

    /// Only show these brands (repeatable).
    #[arg(short, long)]
    pub brand: Vec<String>,

    /// Sort order: default, price_low or price_high.
    #[arg(long)]
    pub sort: Option<String>,

    /// Page number, starting at 1.
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Raw query string, e.g. "search=shirt&style=casual&page=2".
    #[arg(short, long, conflicts_with_all = ["search", "style", "brand", "sort", "page"])]
    pub query: Option<String>,
}

impl BrowseArgs {
    /// Build the listing query for the given page size.
    pub fn to_query(&self, page_size: usize) -> ListingQuery {
        if let Some(qs) = &self.query {
            return ListingQuery::from_query_string(qs, page_size);
        }

        let mut query = ListingQuery::new(page_size)
            .with_sort(SortKey::parse(self.sort.as_deref().unwrap_or_default()))
            .with_page(self.page);
        if let Some(search) = &self.search {
            query = query.with_search(search.as_str());
        }
        for style in &self.style {
            query = query.with_style(style.as_str());
        }
        for brand in &self.brand {
            query = query.with_brand(brand.as_str());
        }
        query
    }
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub product_id: String,
}

/// Who the cart command acts for.
#[derive(Args)]
pub struct ShopperArgs {
    /// Signed-in user id. Without it the command runs anonymously.
    #[arg(short, long, global = true)]
    pub user: Option<i64>,

    /// Username recorded on new cart rows.
    #[arg(long, global = true)]
    pub username: Option<String>,
}

impl ShopperArgs {
    pub fn shopper(&self) -> Option<Shopper> {
        self.user.map(|id| {
            let username = self
                .username
                .clone()
                .unwrap_or_else(|| format!("user{}", id));
            Shopper::new(id, username)
        })
    }
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(flatten)]
    pub shopper: ShopperArgs,

    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Add a product to the cart.
    Add {
        /// Product id.
        product_id: String,
    },
    /// Remove a product from the cart.
    Remove {
        /// Product id.
        product_id: String,
    },
    /// List the product ids in the cart.
    Check,
    /// Show the cart as a paged listing.
    View {
        /// Page number, starting at 1.
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Remove every product from the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Catalog path to write into the new file.
        #[arg(long, default_value = "products.json")]
        catalog: String,
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        browse: BrowseArgs,
    }

    fn browse(args: &[&str]) -> BrowseArgs {
        TestCli::parse_from(std::iter::once("sprout").chain(args.iter().copied())).browse
    }

    #[test]
    fn test_browse_flags_build_query() {
        let query = browse(&["--search", " Shirt ", "--style", "casual", "--style", "formal", "-b", "Acme", "--sort", "price_high", "-p", "2"])
            .to_query(25);

        assert_eq!(query.normalized_search().as_deref(), Some("shirt"));
        assert_eq!(query.styles.len(), 2);
        assert!(query.brands.contains("Acme"));
        assert_eq!(query.sort_key, SortKey::PriceHigh);
        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, 25);
    }

    #[test]
    fn test_browse_unknown_sort_falls_back() {
        let query = browse(&["--sort", "newest"]).to_query(25);
        assert_eq!(query.sort_key, SortKey::Default);
    }

    #[test]
    fn test_browse_page_zero_is_first_page() {
        assert_eq!(browse(&["--page", "0"]).to_query(25).page, 1);
    }

    #[test]
    fn test_browse_raw_query_string() {
        let query = browse(&["--query", "search=shirt&brand=Acme&page=3"]).to_query(10);

        assert_eq!(query.normalized_search().as_deref(), Some("shirt"));
        assert!(query.brands.contains("Acme"));
        assert_eq!(query.page, 3);
        assert_eq!(query.page_size, 10);
    }

    #[test]
    fn test_browse_raw_query_string_rejects_flags() {
        for flag in [["--sort", "price_high"], ["--search", "shirt"], ["--page", "2"]] {
            let args = ["sprout", "--query", "search=shirt", flag[0], flag[1]];
            assert!(TestCli::try_parse_from(args).is_err(), "{} accepted next to --query", flag[0]);
        }
    }

    #[test]
    fn test_shopper_defaults_username() {
        let args = ShopperArgs {
            user: Some(4),
            username: None,
        };
        assert_eq!(args.shopper().map(|s| s.username), Some("user4".to_string()));

        let anonymous = ShopperArgs {
            user: None,
            username: Some("mina".to_string()),
        };
        assert!(anonymous.shopper().is_none());
    }
}
