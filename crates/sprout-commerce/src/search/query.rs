//! Listing query builder.

use crate::search::{Filter, NavWindow};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sort options for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Source order.
    #[default]
    Default,
    /// Sort by price, low to high.
    PriceLow,
    /// Sort by price, high to low.
    PriceHigh,
}

impl SortKey {
    /// Parse a `sort` parameter. Unknown values fall back to `Default`.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "price_low" => SortKey::PriceLow,
            "price_high" => SortKey::PriceHigh,
            _ => SortKey::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceLow => "price_low",
            SortKey::PriceHigh => "price_high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Default => "Featured",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
        }
    }
}

/// Page size and pager window used together by one kind of listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPreset {
    /// Items per page.
    pub page_size: usize,
    /// Pager window.
    pub window: NavWindow,
}

impl ListingPreset {
    /// Catalog browsing: 25 per page, three pages either side of the current one.
    pub const CATALOG: ListingPreset = ListingPreset {
        page_size: 25,
        window: NavWindow::CATALOG,
    };

    /// Account cart view: 3 per page, two pages either side.
    pub const ACCOUNT: ListingPreset = ListingPreset {
        page_size: 3,
        window: NavWindow::ACCOUNT,
    };

    /// Start a query with this preset's page size.
    pub fn query(&self) -> ListingQuery {
        ListingQuery::new(self.page_size)
    }
}

/// A normalized listing request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingQuery {
    /// Text matched against product names, case-insensitively.
    pub search_text: String,
    /// Accepted styles. Empty accepts all.
    pub styles: BTreeSet<String>,
    /// Accepted brands. Empty accepts all.
    pub brands: BTreeSet<String>,
    /// Sort option.
    pub sort_key: SortKey,
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub page_size: usize,
}

impl ListingQuery {
    /// Create a query for the first page with no filters.
    pub fn new(page_size: usize) -> Self {
        Self {
            search_text: String::new(),
            styles: BTreeSet::new(),
            brands: BTreeSet::new(),
            sort_key: SortKey::Default,
            page: 1,
            page_size,
        }
    }

    /// Set the search text.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Accept a style.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.styles.insert(style.into());
        self
    }

    /// Accept a brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.insert(brand.into());
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort_key = sort;
        self
    }

    /// Set the page. Zero is treated as the first page.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Search text as matched: trimmed and lower-cased, `None` when blank.
    pub fn normalized_search(&self) -> Option<String> {
        let text = self.search_text.trim().to_lowercase();
        (!text.is_empty()).then_some(text)
    }

    /// The filters this query applies, in evaluation order.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters: Vec<Filter> = Filter::text(&self.search_text).into_iter().collect();
        if !self.styles.is_empty() {
            filters.push(Filter::Styles(self.styles.clone()));
        }
        if !self.brands.is_empty() {
            filters.push(Filter::Brands(self.brands.clone()));
        }
        filters
    }

    /// Calculate the offset of the first item on the current page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Parse a listing query from a URL query string.
    ///
    /// Recognizes `search`, `style` and `brand` (both repeatable), `sort` and
    /// `page`. A missing, non-numeric or zero page becomes 1 and an unknown
    /// sort becomes `SortKey::Default`. Unknown keys are ignored.
    pub fn from_query_string(qs: &str, page_size: usize) -> Self {
        let mut query = ListingQuery::new(page_size);

        for pair in qs.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let mut parts = pair.splitn(2, '=');
            let key = decode_component(parts.next().unwrap_or(""));
            let value = decode_component(parts.next().unwrap_or(""));

            match key.as_str() {
                "search" => query.search_text = value,
                "style" if !value.is_empty() => {
                    query.styles.insert(value);
                }
                "brand" if !value.is_empty() => {
                    query.brands.insert(value);
                }
                "sort" => query.sort_key = SortKey::parse(&value),
                "page" => query.page = value.trim().parse().unwrap_or(1).max(1),
                _ => {}
            }
        }

        query
    }
}

/// Decode one `application/x-www-form-urlencoded` component.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builder() {
        let query = ListingQuery::new(10)
            .with_search("shirt")
            .with_style("casual")
            .with_brand("Acme")
            .with_sort(SortKey::PriceLow)
            .with_page(2);

        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, 10);
        assert_eq!(query.offset(), 10);
        assert_eq!(query.sort_key, SortKey::PriceLow);
        assert_eq!(query.filters().len(), 3);
    }

    #[test]
    fn test_with_page_zero_is_first_page() {
        assert_eq!(ListingQuery::new(25).with_page(0).page, 1);
    }

    #[test]
    fn test_blank_search_adds_no_filter() {
        let query = ListingQuery::new(25).with_search("   ");

        assert!(query.normalized_search().is_none());
        assert!(query.filters().is_empty());
    }

    #[test]
    fn test_search_is_normalized() {
        let query = ListingQuery::new(25).with_search("  Blue SHIRT ");
        assert_eq!(query.normalized_search().as_deref(), Some("blue shirt"));
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("price_low"), SortKey::PriceLow);
        assert_eq!(SortKey::parse("price_high"), SortKey::PriceHigh);
        assert_eq!(SortKey::parse("default"), SortKey::Default);
        assert_eq!(SortKey::parse("newest"), SortKey::Default);
        assert_eq!(SortKey::PriceHigh.as_str(), "price_high");
    }

    #[test]
    fn test_sort_key_serde_names() {
        let json = serde_json::to_string(&SortKey::PriceLow).unwrap();
        assert_eq!(json, "\"price_low\"");
    }

    #[test]
    fn test_from_query_string() {
        let query = ListingQuery::from_query_string(
            "search=blue+shirt&style=casual&style=street&brand=Acme%20Co&sort=price_high&page=3",
            25,
        );

        assert_eq!(query.search_text, "blue shirt");
        assert_eq!(
            query.styles.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["casual", "street"]
        );
        assert!(query.brands.contains("Acme Co"));
        assert_eq!(query.sort_key, SortKey::PriceHigh);
        assert_eq!(query.page, 3);
        assert_eq!(query.page_size, 25);
    }

    #[test]
    fn test_from_query_string_defaults() {
        let query = ListingQuery::from_query_string("", 3);

        assert_eq!(query, ListingQuery::new(3));
    }

    #[test]
    fn test_from_query_string_bad_page() {
        for qs in ["page=abc", "page=0", "page=-2", "page="] {
            let query = ListingQuery::from_query_string(qs, 25);
            assert_eq!(query.page, 1, "query string {qs:?}");
        }
    }

    #[test]
    fn test_from_query_string_utf8() {
        let query = ListingQuery::from_query_string("?search=%EC%85%94%EC%B8%A0", 25);
        assert_eq!(query.search_text, "셔츠");
    }

    #[test]
    fn test_presets() {
        assert_eq!(ListingPreset::CATALOG.page_size, 25);
        assert_eq!(ListingPreset::ACCOUNT.page_size, 3);
        assert_eq!(ListingPreset::ACCOUNT.query().page_size, 3);
        assert_eq!(ListingPreset::CATALOG.window, NavWindow::CATALOG);
    }
}
