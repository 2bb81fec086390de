//! Brand and style facets for the filter sidebar.

use crate::catalog::ProductRecord;
use crate::search::ListingQuery;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A single facet value with count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetValue {
    /// The value.
    pub value: String,
    /// Number of records carrying the value.
    pub count: usize,
    /// Whether the current query filters on it.
    pub selected: bool,
}

/// A facet for filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Facet {
    /// Facet name (e.g. "Brand").
    pub name: String,
    /// Query parameter this facet filters on.
    pub key: String,
    /// Facet values, ordered by value.
    pub values: Vec<FacetValue>,
}

impl Facet {
    fn terms<'a>(
        name: &str,
        key: &str,
        values: impl Iterator<Item = &'a str>,
        selected: &BTreeSet<String>,
    ) -> Self {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for value in values.filter(|v| !v.is_empty()) {
            *counts.entry(value).or_insert(0) += 1;
        }

        Self {
            name: name.to_string(),
            key: key.to_string(),
            values: counts
                .into_iter()
                .map(|(value, count)| FacetValue {
                    selected: selected.contains(value),
                    value: value.to_string(),
                    count,
                })
                .collect(),
        }
    }
}

/// Available facets for a record set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Facets {
    pub brands: Facet,
    pub styles: Facet,
}

impl Facets {
    /// Count brands and styles over `records`, marking the ones `query` selects.
    pub fn from_records(records: &[ProductRecord], query: &ListingQuery) -> Self {
        Self {
            brands: Facet::terms(
                "Brand",
                "brand",
                records.iter().map(ProductRecord::brand_key),
                &query.brands,
            ),
            styles: Facet::terms(
                "Style",
                "style",
                records.iter().map(ProductRecord::style_key),
                &query.styles,
            ),
        }
    }
}
