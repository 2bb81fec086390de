//! Cart persistence seam and its in-memory implementation.

use crate::cart::CartItem;
use crate::error::CommerceError;
use crate::ids::{CartItemId, ProductId, UserId};
use serde::{Deserialize, Serialize};

/// Storage for cart items.
///
/// One row per (user, product) pair; callers check `find` before `insert`.
pub trait CartStore {
    /// The cart row for this user and product, if any.
    fn find(&self, user: UserId, product: ProductId) -> Result<Option<CartItem>, CommerceError>;

    /// Store an item, assigning its id. Returns the stored row.
    fn insert(&mut self, item: CartItem) -> Result<CartItem, CommerceError>;

    /// Delete the row for this user and product. Returns whether one existed.
    fn remove(&mut self, user: UserId, product: ProductId) -> Result<bool, CommerceError>;

    /// All rows of one user, newest first.
    fn items_for(&self, user: UserId) -> Result<Vec<CartItem>, CommerceError>;

    /// Delete every row of one user. Returns how many were deleted.
    fn clear(&mut self, user: UserId) -> Result<usize, CommerceError>;
}

/// Cart rows held in memory.
///
/// Serializable so a boundary can persist the whole table as one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InMemoryCartStore {
    #[serde(default)]
    last_id: i64,
    #[serde(default)]
    items: Vec<CartItem>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a store from its JSON document.
    pub fn from_json_str(text: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize the store as a JSON document.
    pub fn to_json_string(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of rows across all users.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CartStore for InMemoryCartStore {
    fn find(&self, user: UserId, product: ProductId) -> Result<Option<CartItem>, CommerceError> {
        Ok(self
            .items
            .iter()
            .find(|i| i.user_id == user && i.product_id == product)
            .cloned())
    }

    fn insert(&mut self, mut item: CartItem) -> Result<CartItem, CommerceError> {
        self.last_id += 1;
        item.id = CartItemId::new(self.last_id);
        self.items.push(item.clone());
        Ok(item)
    }

    fn remove(&mut self, user: UserId, product: ProductId) -> Result<bool, CommerceError> {
        let len_before = self.items.len();
        self.items
            .retain(|i| !(i.user_id == user && i.product_id == product));
        Ok(self.items.len() < len_before)
    }

    fn items_for(&self, user: UserId) -> Result<Vec<CartItem>, CommerceError> {
        let mut items: Vec<CartItem> = self
            .items
            .iter()
            .filter(|i| i.user_id == user)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(items)
    }

    fn clear(&mut self, user: UserId) -> Result<usize, CommerceError> {
        let len_before = self.items.len();
        self.items.retain(|i| i.user_id != user);
        Ok(len_before - self.items.len())
    }
}
