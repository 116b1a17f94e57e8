//! Pagination types
//!
//! Shared types for requesting and describing pages.

use serde::{Deserialize, Serialize};

/// Sentinel value of [`Pager::total_pages`](super::Pager::total_pages) when
/// total page counting is disabled for the instance.
pub const TOTAL_PAGES_DISABLED: i64 = -1;

/// Default page size when a request does not specify one
pub const DEFAULT_PER_PAGE: i64 = 25;

/// Paging parameters, as they arrive from configuration or query strings.
///
/// Values are deliberately unvalidated integers: the pager normalizes
/// non-positive pages and page sizes instead of rejecting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    /// 1-based page number to fetch
    pub page: i64,
    /// Requested number of items per page
    pub per_page: i64,
    /// Skip the total page count query entirely (one less query per fetch)
    pub disable_total_page_count: bool,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            disable_total_page_count: false,
        }
    }
}

impl PageRequest {
    /// Create a request for `page` with `per_page` items per page
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page,
            per_page,
            ..Self::default()
        }
    }

    /// Disable the total page count query
    #[must_use]
    pub fn without_total_page_count(mut self) -> Self {
        self.disable_total_page_count = true;
        self
    }
}

/// Snapshot of a pager's position, suitable for structured output.
///
/// `total_pages` is `None` when counting is disabled for the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Current 1-based page number
    pub page: usize,
    /// Effective page size
    pub items_per_page: usize,
    /// Total number of pages, when counting is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<usize>,
    /// Whether a page beyond the current one holds at least one element
    pub has_more_pages: bool,
}
