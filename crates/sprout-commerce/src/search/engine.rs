//! The listing engine: filter, sort, then slice one page.

use crate::catalog::ProductRecord;
use crate::search::{ListingQuery, Page, SortKey};
use std::cmp::Reverse;

/// Produce one page of `records` for `query`.
///
/// Records are kept if they pass every filter of the query, then ordered by
/// `query.sort_key`. Both price orders are stable, so equal prices keep
/// their source order. The page is the slice
/// `[(page - 1) * page_size, page * page_size)` of that sequence; pages
/// past the end come back empty with the same totals.
///
/// Pure: the same inputs always produce the same page.
///
/// # Panics
///
/// Panics if `query.page_size` or `query.page` is zero.
pub fn list_products(records: &[ProductRecord], query: &ListingQuery) -> Page {
    assert!(query.page_size > 0, "page_size must be positive");
    assert!(query.page > 0, "page must be normalized to 1 or more");

    let filters = query.filters();
    let mut matched: Vec<&ProductRecord> = records
        .iter()
        .filter(|record| filters.iter().all(|f| f.matches(record)))
        .collect();

    match query.sort_key {
        SortKey::Default => {}
        SortKey::PriceLow => matched.sort_by_key(|r| r.price_or_zero()),
        SortKey::PriceHigh => matched.sort_by_key(|r| Reverse(r.price_or_zero())),
    }

    let total_items = matched.len();
    let items = matched
        .into_iter()
        .skip(query.offset())
        .take(query.page_size)
        .cloned()
        .collect();

    Page::new(items, query.page, query.page_size, total_items)
}
