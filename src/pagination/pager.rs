//! The pager
//!
//! Wraps a [`DataSource`] and materializes one page of it at a time.

use super::types::{PageInfo, PageRequest, TOTAL_PAGES_DISABLED};
use crate::error::{Error, Result};
use crate::source::DataSource;

/// Pages the result of a countable, sliceable query.
///
/// A pager borrows its source and holds the current page's items plus the
/// paging state around them. Construction runs the first fetch, so the
/// instance is readable immediately; [`next_page`](Pager::next_page) and
/// [`previous_page`](Pager::previous_page) move through the sequence in
/// place and return `&mut Self` so calls can be chained.
///
/// Whether more pages exist is detected by over-fetching a single probe
/// element past the page boundary, so a `next_page` check never costs a
/// second count query.
///
/// ```
/// use pagekit::Pager;
///
/// let items: Vec<i32> = (1..=15).collect();
/// let mut pager = Pager::new(&items, 1, 12);
///
/// assert_eq!(pager.paged_result().len(), 12);
/// assert!(pager.has_more_pages());
///
/// pager.next_page();
/// assert_eq!(pager.page(), 2);
/// assert_eq!(pager.paged_result(), &[13, 14, 15]);
/// ```
pub struct Pager<'a, S: DataSource + ?Sized> {
    source: &'a S,
    page: usize,
    items_per_page: usize,
    total_pages: i64,
    has_more_pages: bool,
    paged_result: Vec<S::Item>,
}

impl<'a, S: DataSource + ?Sized> Pager<'a, S> {
    /// Page `source`, starting at `page` with `items_per_page` items per page.
    ///
    /// A page below 1 is treated as page 1 and a page size below 1 as 1;
    /// out-of-range values never fail.
    pub fn new(source: &'a S, page: i64, items_per_page: i64) -> Self {
        Self::with_options(source, page, items_per_page, false)
    }

    /// Like [`new`](Pager::new), optionally skipping the total page count.
    ///
    /// With `disable_total_page_count` set, [`total_pages`](Pager::total_pages)
    /// stays at [`TOTAL_PAGES_DISABLED`] for the life of the instance and no
    /// count query is ever issued against the source.
    pub fn with_options(
        source: &'a S,
        page: i64,
        items_per_page: i64,
        disable_total_page_count: bool,
    ) -> Self {
        let mut pager = Self {
            source,
            page: at_least_one(page),
            items_per_page: at_least_one(items_per_page),
            total_pages: if disable_total_page_count {
                TOTAL_PAGES_DISABLED
            } else {
                0
            },
            has_more_pages: false,
            paged_result: Vec::new(),
        };
        pager.fetch();
        pager
    }

    /// Build a pager from a possibly-absent source and a [`PageRequest`].
    ///
    /// This is the configuration-driven path: where the source comes from a
    /// lookup that may have found nothing, absence is an
    /// [`Error::InvalidArgument`], not a panic.
    pub fn from_request(source: Option<&'a S>, request: &PageRequest) -> Result<Self> {
        let source =
            source.ok_or_else(|| Error::invalid_argument("data source is required"))?;
        Ok(Self::with_options(
            source,
            request.page,
            request.per_page,
            request.disable_total_page_count,
        ))
    }

    /// Fetch the current page from the source.
    ///
    /// Recomputes the total page count (unless disabled), then requests one
    /// element past the page boundary: the extra element only probes for a
    /// next page and is dropped from the result.
    fn fetch(&mut self) {
        if self.total_pages != TOTAL_PAGES_DISABLED {
            let count = self.source.count();
            let full_pages = count / self.items_per_page;
            let pages = if count % self.items_per_page > 0 {
                full_pages + 1
            } else {
                full_pages
            };
            // An empty or under-filled source still reports one page, never zero.
            self.total_pages = pages.max(1) as i64;
        }

        let offset = (self.page - 1) * self.items_per_page;
        let mut window = self.source.slice(offset, self.items_per_page + 1);
        tracing::debug!(
            page = self.page,
            offset,
            fetched = window.len(),
            "fetched page window"
        );

        self.has_more_pages = window.len() == self.items_per_page + 1;
        window.truncate(self.items_per_page);
        self.paged_result = window;
    }

    /// Advance to the next page.
    ///
    /// A no-op when no further page exists: the page number stays put and
    /// the source is not queried again.
    pub fn next_page(&mut self) -> &mut Self {
        if !self.has_more_pages {
            return self;
        }

        self.page += 1;
        self.fetch();
        self
    }

    /// Step back to the previous page. A no-op on page 1.
    pub fn previous_page(&mut self) -> &mut Self {
        if self.page == 1 {
            return self;
        }

        self.page -= 1;
        self.fetch();
        self
    }

    /// Current 1-based page number (always ≥ 1)
    pub fn page(&self) -> usize {
        self.page
    }

    /// Effective page size (always ≥ 1)
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Total number of pages, or [`TOTAL_PAGES_DISABLED`] when counting is
    /// disabled. At least 1 when enabled, even for an empty source.
    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }

    /// Whether a page beyond the current one holds at least one element
    pub fn has_more_pages(&self) -> bool {
        self.has_more_pages
    }

    /// The current page's materialized items, at most
    /// [`items_per_page`](Pager::items_per_page) of them
    pub fn paged_result(&self) -> &[S::Item] {
        &self.paged_result
    }

    /// Snapshot of the current position as a serializable [`PageInfo`]
    pub fn info(&self) -> PageInfo {
        PageInfo {
            page: self.page,
            items_per_page: self.items_per_page,
            total_pages: (self.total_pages != TOTAL_PAGES_DISABLED)
                .then_some(self.total_pages as usize),
            has_more_pages: self.has_more_pages,
        }
    }
}

/// Coerce a raw request value to the 1-based domain
fn at_least_one(value: i64) -> usize {
    if value < 1 {
        1
    } else {
        value as usize
    }
}
