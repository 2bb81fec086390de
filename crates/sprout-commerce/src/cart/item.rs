//! Cart items and the shopper they belong to.

use crate::catalog::ProductRecord;
use crate::ids::{CartItemId, ProductId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in user a request acts for.
///
/// Passed explicitly into cart operations; `None` in their signatures
/// means nobody is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shopper {
    pub id: UserId,
    pub username: String,
}

impl Shopper {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
            username: username.into(),
        }
    }
}

/// A product in a user's cart.
///
/// Product fields are copied when the item is added so the cart can be
/// shown without reading the product source again. Rows written before
/// snapshots existed carry no product fields at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Row id, assigned by the store.
    pub id: CartItemId,
    pub user_id: UserId,
    pub username: String,
    pub product_id: ProductId,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    /// When the item was added.
    pub created_at: DateTime<Utc>,
}

impl CartItem {
    /// Snapshot `product` into a new, not yet stored, cart item.
    pub fn snapshot(shopper: &Shopper, product: &ProductRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            id: CartItemId::new(0),
            user_id: shopper.id,
            username: shopper.username.clone(),
            product_id: product.id,
            brand: product.brand.clone(),
            name: Some(product.name.clone()),
            price: product.price,
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            style: product.style.clone(),
            created_at,
        }
    }

    /// Whether the snapshot is usable on its own: a non-empty name and a
    /// non-zero price.
    pub fn has_snapshot(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty()) && self.price.is_some_and(|p| p > 0)
    }

    /// The snapshot as a listing record.
    pub fn to_record(&self) -> ProductRecord {
        ProductRecord {
            id: self.product_id,
            brand: self.brand.clone(),
            name: self.name.clone().unwrap_or_default(),
            price: self.price,
            style: self.style.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> ProductRecord {
        ProductRecord::new(7, "Blue Shirt")
            .with_brand("Acme")
            .with_price(30000)
            .with_style("casual")
            .with_description("Oxford cotton")
            .with_image_url("/img/7.jpg")
    }

    #[test]
    fn test_snapshot_copies_product() {
        let shopper = Shopper::new(1, "mina");
        let item = CartItem::snapshot(&shopper, &product(), Utc::now());

        assert_eq!(item.user_id, UserId::new(1));
        assert_eq!(item.username, "mina");
        assert_eq!(item.product_id, ProductId::new(7));
        assert!(item.has_snapshot());

        let record = item.to_record();
        assert_eq!(record.name, "Blue Shirt");
        assert_eq!(record.brand.as_deref(), Some("Acme"));
        assert_eq!(record.description.as_deref(), Some("Oxford cotton"));
        assert_eq!(record.price, Some(30000));
    }

    #[test]
    fn test_snapshot_needs_name_and_price() {
        let shopper = Shopper::new(1, "mina");
        let mut item = CartItem::snapshot(&shopper, &product(), Utc::now());

        item.price = Some(0);
        assert!(!item.has_snapshot());

        item.price = Some(10);
        item.name = Some(String::new());
        assert!(!item.has_snapshot());

        item.name = None;
        assert!(!item.has_snapshot());
    }

    #[test]
    fn test_legacy_row_deserializes() {
        let json = r#"{
            "id": 4, "user_id": 1, "username": "mina", "product_id": 7,
            "created_at": "2025-01-02T03:04:05Z"
        }"#;
        let item: CartItem = serde_json::from_str(json).unwrap();

        assert!(!item.has_snapshot());
        assert!(item.brand.is_none());
    }
}
