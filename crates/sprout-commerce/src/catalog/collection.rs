//! The product collection listings are computed over.

use crate::catalog::ProductRecord;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Lookup of single products by id.
///
/// The cart reads product data through this seam, whether the products
/// come from the catalog document or from a product table.
pub trait ProductLookup {
    /// Fetch a product, or `None` if it does not exist (any more).
    fn product(&self, id: ProductId) -> Option<ProductRecord>;
}

/// An ordered set of products.
///
/// Serialized as the catalog document, `{"products": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    products: Vec<ProductRecord>,
}

impl Catalog {
    /// Create a catalog from records in source order.
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }

    /// Parse a catalog document.
    ///
    /// A document without a `products` key is an empty catalog.
    pub fn from_json_str(text: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(text)?)
    }

    /// All records, in source order.
    pub fn records(&self) -> &[ProductRecord] {
        &self.products
    }

    /// Find a product by id.
    pub fn find(&self, id: ProductId) -> Result<&ProductRecord, CommerceError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CommerceError::ProductNotFound(id))
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductLookup for Catalog {
    fn product(&self, id: ProductId) -> Option<ProductRecord> {
        self.find(id).ok().cloned()
    }
}
