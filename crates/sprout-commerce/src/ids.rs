//! Newtype IDs for type-safe identifiers.
//!
//! Rows in the storefront are keyed by integers. Wrapping them keeps a
//! user id from being passed where a product id is expected.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate integer newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique integer identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create an ID from its raw value.
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the raw value.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(ProductId);
define_id!(UserId);
define_id!(CartItemId);

impl ProductId {
    /// Parse a product id supplied as request text (e.g. `?product_id=7`).
    pub fn parse(raw: &str) -> Result<Self, CommerceError> {
        raw.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| CommerceError::InvalidProductId(raw.to_string()))
    }
}
