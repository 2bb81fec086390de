//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Listing itself never fails: out-of-range pages degrade to empty pages
/// and broken preconditions panic. These errors cover lookups and carts.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Product id could not be parsed.
    #[error("Invalid product id: {0:?}")]
    InvalidProductId(String),

    /// Operation needs a signed-in shopper.
    #[error("Login required")]
    LoginRequired,

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(ProductId),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Cart storage error.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
