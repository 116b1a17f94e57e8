//! Pagination module
//!
//! Offset pagination over a countable, sliceable [`DataSource`](crate::source::DataSource).
//!
//! # Overview
//!
//! [`Pager`] computes page boundaries, materializes one page of items,
//! detects whether further pages exist, and navigates forward and backward.
//! Invalid paging inputs are normalized instead of rejected: page numbers
//! and page sizes below 1 are coerced to 1. The only construction failure
//! is an absent source on the [`Pager::from_request`] path.

mod pager;
mod types;

pub use pager::Pager;
pub use types::{PageInfo, PageRequest, DEFAULT_PER_PAGE, TOTAL_PAGES_DISABLED};
