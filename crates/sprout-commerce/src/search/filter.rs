//! Listing filter types.

use crate::catalog::ProductRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A listing filter.
///
/// A record is listed only if every filter of the query matches it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Filter {
    /// Name contains the text. The text is already trimmed and lower-cased.
    Text(String),
    /// Trimmed style is one of the given styles.
    Styles(BTreeSet<String>),
    /// Trimmed brand is one of the given brands.
    Brands(BTreeSet<String>),
}

impl Filter {
    /// Create a text filter, or `None` if the text is blank.
    pub fn text(query: &str) -> Option<Self> {
        let query = query.trim().to_lowercase();
        (!query.is_empty()).then_some(Filter::Text(query))
    }

    /// Create a style filter.
    pub fn styles<I, S>(styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter::Styles(styles.into_iter().map(Into::into).collect())
    }

    /// Create a brand filter.
    pub fn brands<I, S>(brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter::Brands(brands.into_iter().map(Into::into).collect())
    }

    /// Check a record against this filter.
    pub fn matches(&self, record: &ProductRecord) -> bool {
        match self {
            Filter::Text(text) => record.name.to_lowercase().contains(text.as_str()),
            Filter::Styles(styles) => styles.contains(record.style_key()),
            Filter::Brands(brands) => brands.contains(record.brand_key()),
        }
    }
}
