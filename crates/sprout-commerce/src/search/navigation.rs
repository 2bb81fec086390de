//! Pager navigation: which page links to render, and where to elide.

use serde::{Deserialize, Serialize};

/// How many page links a pager shows at the edges and around the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavWindow {
    /// Pages always shown at the start.
    pub left_edge: usize,
    /// Pages always shown at the end.
    pub right_edge: usize,
    /// Pages shown before the current one.
    pub left_current: usize,
    /// Pages shown after the current one.
    pub right_current: usize,
}

impl NavWindow {
    /// Window used when browsing the catalog.
    pub const CATALOG: NavWindow = NavWindow::new(1, 1, 3, 3);

    /// Window used by the account cart view.
    pub const ACCOUNT: NavWindow = NavWindow::new(1, 1, 2, 2);

    pub const fn new(
        left_edge: usize,
        right_edge: usize,
        left_current: usize,
        right_current: usize,
    ) -> Self {
        Self {
            left_edge,
            right_edge,
            left_current,
            right_current,
        }
    }

    /// Whether both edges show at least one page.
    pub fn is_valid(&self) -> bool {
        self.left_edge >= 1 && self.right_edge >= 1
    }

    fn includes(&self, num: usize, page: usize, total_pages: usize) -> bool {
        num <= self.left_edge
            || num > total_pages.saturating_sub(self.right_edge)
            || (num >= page.saturating_sub(self.left_current)
                && num <= page.saturating_add(self.right_current))
    }
}

/// One entry of a pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavToken {
    /// Link to a page.
    Page(usize),
    /// Elided run of pages. Serialized as `null`.
    Gap,
}

/// The ordered page links of a pager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageNavigation(Vec<NavToken>);

impl PageNavigation {
    /// The tokens in display order.
    pub fn tokens(&self) -> &[NavToken] {
        &self.0
    }

    /// Iterate over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, NavToken> {
        self.0.iter()
    }

    /// Page numbers only, gaps dropped.
    pub fn pages(&self) -> Vec<usize> {
        self.0
            .iter()
            .filter_map(|token| match token {
                NavToken::Page(num) => Some(*num),
                NavToken::Gap => None,
            })
            .collect()
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a PageNavigation {
    type Item = &'a NavToken;
    type IntoIter = std::slice::Iter<'a, NavToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Compute the pager for `page_number` out of `total_pages`.
///
/// A page is shown if it is within `left_edge` of the start, within
/// `right_edge` of the end, or inside the inclusive window around the
/// current page. A single gap marks each jump between shown pages. Since
/// both edges are shown the first and last tokens are always pages.
///
/// # Panics
///
/// Panics if `total_pages` is zero or either edge of `window` is zero.
pub fn navigation(page_number: usize, total_pages: usize, window: NavWindow) -> PageNavigation {
    assert!(total_pages >= 1, "total_pages must be at least 1");
    assert!(
        window.is_valid(),
        "pager window needs left_edge >= 1 and right_edge >= 1, got {window:?}"
    );

    let mut tokens = Vec::new();
    let mut last = 0;
    for num in 1..=total_pages {
        if window.includes(num, page_number, total_pages) {
            if last + 1 != num {
                tokens.push(NavToken::Gap);
            }
            tokens.push(NavToken::Page(num));
            last = num;
        }
    }

    PageNavigation(tokens)
}
