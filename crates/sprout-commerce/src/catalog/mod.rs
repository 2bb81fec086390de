//! Catalog module.
//!
//! Contains product records, the catalog collection and facets.

mod collection;
mod facets;
mod product;

pub use collection::{Catalog, ProductLookup};
pub use facets::{Facet, FacetValue, Facets};
pub use product::ProductRecord;
