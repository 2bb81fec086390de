//! A page of listing results.

use crate::catalog::ProductRecord;
use crate::search::{navigation, NavWindow, PageNavigation};
use serde::{Deserialize, Serialize};

/// One page of a filtered, sorted listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T = ProductRecord> {
    /// Items on this page, at most `page_size`.
    pub items: Vec<T>,
    /// Current page (1-indexed).
    pub page_number: usize,
    /// Items per page.
    pub page_size: usize,
    /// Items matching the query across all pages.
    pub total_items: usize,
    /// Number of pages, at least 1 even when nothing matched.
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Create a page. `total_pages` is derived from `total_items`.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub fn new(items: Vec<T>, page_number: usize, page_size: usize, total_items: usize) -> Self {
        assert!(page_size > 0, "page_size must be positive");

        Self {
            items,
            page_number,
            page_size,
            total_items,
            total_pages: total_items.div_ceil(page_size).max(1),
        }
    }

    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page_number > 1
    }

    /// Whether a following page exists.
    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// Previous page number, if any.
    pub fn prev_num(&self) -> Option<usize> {
        self.has_prev().then(|| self.page_number - 1)
    }

    /// Next page number, if any.
    pub fn next_num(&self) -> Option<usize> {
        self.has_next().then(|| self.page_number + 1)
    }

    /// Pager links for this page.
    pub fn navigation(&self, window: NavWindow) -> PageNavigation {
        navigation(self.page_number, self.total_pages, window)
    }

    /// 1-indexed position of the first item shown, 0 when the page is empty.
    pub fn start_item(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page_number - 1) * self.page_size + 1
        }
    }

    /// 1-indexed position of the last item shown, 0 when the page is empty.
    pub fn end_item(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page_number - 1) * self.page_size + self.items.len()
        }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_basics() {
        let p = Page::new(vec![0; 10], 2, 10, 45);

        assert_eq!(p.total_pages, 5);
        assert!(p.has_next());
        assert!(p.has_prev());
        assert_eq!(p.prev_num(), Some(1));
        assert_eq!(p.next_num(), Some(3));
    }

    #[test]
    fn test_first_page() {
        let p = Page::new(vec![0; 10], 1, 10, 45);

        assert!(!p.has_prev());
        assert_eq!(p.prev_num(), None);
        assert!(p.has_next());
    }

    #[test]
    fn test_last_page() {
        let p = Page::new(vec![0; 5], 5, 10, 45);

        assert!(p.has_prev());
        assert!(!p.has_next());
        assert_eq!(p.next_num(), None);
    }

    #[test]
    fn test_empty_total_has_one_page() {
        let p: Page<u8> = Page::new(Vec::new(), 1, 25, 0);

        assert_eq!(p.total_pages, 1);
        assert!(!p.has_next());
        assert!(!p.has_prev());
        assert!(p.is_empty());
    }

    #[test]
    fn test_exact_multiple() {
        let p: Page<u8> = Page::new(Vec::new(), 1, 3, 9);
        assert_eq!(p.total_pages, 3);
    }

    #[test]
    fn test_item_range() {
        let p = Page::new(vec![0; 10], 2, 10, 45);
        assert_eq!(p.start_item(), 11);
        assert_eq!(p.end_item(), 20);

        let past_end: Page<u8> = Page::new(Vec::new(), 9, 10, 45);
        assert_eq!(past_end.start_item(), 0);
        assert_eq!(past_end.end_item(), 0);
    }

    #[test]
    fn test_navigation_uses_page_position() {
        let p: Page<u8> = Page::new(Vec::new(), 5, 3, 30);
        assert_eq!(p.navigation(NavWindow::ACCOUNT).pages(), vec![1, 3, 4, 5, 6, 7, 10]);
    }

    #[test]
    #[should_panic(expected = "page_size must be positive")]
    fn test_zero_page_size_panics() {
        let _: Page<u8> = Page::new(Vec::new(), 1, 0, 0);
    }
}
