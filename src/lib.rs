//! # pagekit
//!
//! A minimal, Rust-native toolkit for paging ordered data sources.
//!
//! ## Features
//!
//! - **Offset Pagination**: 1-based pages over any countable, sliceable sequence
//! - **Probe-Based Lookahead**: detects further pages with a single over-fetch,
//!   no extra count query
//! - **Input Normalization**: out-of-range page numbers and page sizes are
//!   coerced, never rejected
//! - **Optional Page Counting**: skip the total count query entirely for
//!   sources where counting is expensive
//! - **Pluggable Sources**: in-memory backends included, any store behind a
//!   two-method trait
//!
//! ## Quick Start
//!
//! ```rust
//! use pagekit::Pager;
//!
//! let items: Vec<i32> = (1..=15).collect();
//! let mut pager = Pager::new(&items, 1, 12);
//!
//! assert_eq!(pager.total_pages(), 2);
//! assert_eq!(pager.paged_result().len(), 12);
//! assert!(pager.has_more_pages());
//!
//! pager.next_page();
//! assert_eq!(pager.page(), 2);
//! assert_eq!(pager.paged_result(), &[13, 14, 15]);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                          Pager                          │
//! │  new(source, page, per_page)   next_page() previous_page()
//! │  page() total_pages() has_more_pages() paged_result()   │
//! └────────────────────────────┬────────────────────────────┘
//!                              │ count() / slice(offset, limit)
//! ┌────────────────────────────┴────────────────────────────┐
//! │                       DataSource                        │
//! ├──────────────┬──────────────┬───────────────────────────┤
//! │  [T] / Vec<T>│  borrowed &S │  your own backend         │
//! └──────────────┴──────────────┴───────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Data source abstraction and in-memory backends
pub mod source;

/// The pager and its request/info types
pub mod pagination;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use pagination::{PageInfo, PageRequest, Pager, DEFAULT_PER_PAGE, TOTAL_PAGES_DISABLED};
pub use source::DataSource;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
