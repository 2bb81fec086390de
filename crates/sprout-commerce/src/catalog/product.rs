//! Product records as they arrive from the catalog file or product table.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product as seen by listings.
///
/// Records are read-only snapshots of an external source. Every field but
/// `id` may be missing upstream: absent strings read as empty and an absent
/// price sorts as zero. Fields this type does not know about are kept in
/// `extra` and written back out unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    /// Unique product identifier.
    pub id: ProductId,
    /// Brand name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Price in whole currency units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    /// Style tag (e.g. "casual").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Passthrough fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ProductRecord {
    /// Create a record with only an id and a name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id),
            brand: None,
            name: name.into(),
            price: None,
            style: None,
            description: None,
            image_url: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set the price.
    pub fn with_price(mut self, price: u64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the style.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the image URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Price used for ordering; missing prices count as zero.
    pub fn price_or_zero(&self) -> u64 {
        self.price.unwrap_or(0)
    }

    /// Brand with surrounding whitespace removed, empty when missing.
    pub fn brand_key(&self) -> &str {
        self.brand.as_deref().unwrap_or("").trim()
    }

    /// Style with surrounding whitespace removed, empty when missing.
    pub fn style_key(&self) -> &str {
        self.style.as_deref().unwrap_or("").trim()
    }
}
