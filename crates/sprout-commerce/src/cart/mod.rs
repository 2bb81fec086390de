//! Cart module.
//!
//! Contains cart items, the cart store seam and cart operations.

mod item;
mod service;
mod store;

pub use item::{CartItem, Shopper};
pub use service::{
    account_page, add_to_cart, cart_records, check_cart, remove_from_cart, AddOutcome, CartCheck,
    CartResolution,
};
pub use store::{CartStore, InMemoryCartStore};
