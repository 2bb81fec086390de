//! Search module.
//!
//! Contains the listing query, filters, the listing engine, result pages
//! and pager navigation.

mod engine;
mod filter;
mod navigation;
mod query;
mod results;

pub use engine::list_products;
pub use filter::Filter;
pub use navigation::{navigation, NavToken, NavWindow, PageNavigation};
pub use query::{ListingPreset, ListingQuery, SortKey};
pub use results::Page;
