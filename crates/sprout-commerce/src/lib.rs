//! Catalog listing and cart logic for the Sprout storefront.
//!
//! This crate provides the storefront's domain types and logic:
//!
//! - **Catalog**: Product records, JSON catalog documents, facets
//! - **Search**: Filtered, sorted, paginated listings with pager navigation
//! - **Cart**: Per-user carts of denormalized product snapshots
//!
//! Nothing here performs I/O. Loading the catalog file, persisting carts
//! and logging belong to the calling boundary.
//!
//! # Example
//!
//! ```rust,ignore
//! use sprout_commerce::prelude::*;
//!
//! let catalog = Catalog::from_json_str(&text)?;
//!
//! let query = ListingQuery::new(ListingPreset::CATALOG.page_size)
//!     .with_search("shirt")
//!     .with_style("casual")
//!     .with_sort(SortKey::PriceLow)
//!     .with_page(2);
//!
//! let page = list_products(catalog.records(), &query);
//! let pager = page.navigation(ListingPreset::CATALOG.window);
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{Catalog, Facet, FacetValue, Facets, ProductLookup, ProductRecord};

    // Search
    pub use crate::search::{
        list_products, navigation, Filter, ListingPreset, ListingQuery, NavToken, NavWindow,
        Page, PageNavigation, SortKey,
    };

    // Cart
    pub use crate::cart::{
        account_page, add_to_cart, cart_records, check_cart, remove_from_cart, AddOutcome,
        CartCheck, CartItem, CartResolution, CartStore, InMemoryCartStore, Shopper,
    };
}
