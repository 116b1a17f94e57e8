//! In-memory data source backends
//!
//! Slices and vectors are the simplest sources: counting is `len()` and
//! slicing is skip-then-take over the elements. Elements are cloned out so
//! the source itself is never consumed.

use super::types::DataSource;

impl<T: Clone> DataSource for [T] {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn slice(&self, offset: usize, limit: usize) -> Vec<T> {
        self.iter().skip(offset).take(limit).cloned().collect()
    }
}

impl<T: Clone> DataSource for Vec<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn slice(&self, offset: usize, limit: usize) -> Vec<T> {
        self.as_slice().slice(offset, limit)
    }
}
