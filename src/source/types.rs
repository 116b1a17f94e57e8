//! Data source trait
//!
//! Defines the core sequence abstraction the pager depends on.

/// An ordered, countable sequence that can be sliced at an offset.
///
/// Implementations must be read-only and idempotent: the pager calls
/// [`count`](DataSource::count) and [`slice`](DataSource::slice) at arbitrary
/// times and expects repeated calls to have no side effects. Ordering must be
/// stable across calls.
pub trait DataSource {
    /// The element type produced by this source
    type Item;

    /// Total number of elements in the sequence
    fn count(&self) -> usize;

    /// Up to `limit` elements after skipping the first `offset`.
    ///
    /// Returns fewer than `limit` elements when the sequence is exhausted,
    /// and an empty vector when `offset` is past the end.
    fn slice(&self, offset: usize, limit: usize) -> Vec<Self::Item>;
}

impl<S: DataSource + ?Sized> DataSource for &S {
    type Item = S::Item;

    fn count(&self) -> usize {
        (**self).count()
    }

    fn slice(&self, offset: usize, limit: usize) -> Vec<Self::Item> {
        (**self).slice(offset, limit)
    }
}
