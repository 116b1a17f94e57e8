//! Tests for data source backends

use super::*;
use pretty_assertions::assert_eq;

// ============================================================================
// Slice Backend Tests
// ============================================================================

#[test]
fn test_slice_count() {
    let items = [1, 2, 3, 4, 5];
    assert_eq!(items.count(), 5);

    let empty: [i32; 0] = [];
    assert_eq!(empty.count(), 0);
}

#[test]
fn test_slice_skip_then_take() {
    let items = [1, 2, 3, 4, 5];

    assert_eq!(items.slice(0, 2), vec![1, 2]);
    assert_eq!(items.slice(2, 2), vec![3, 4]);
    assert_eq!(items.slice(4, 2), vec![5]);
}

#[test]
fn test_slice_offset_past_end() {
    let items = [1, 2, 3];
    assert_eq!(items.slice(3, 2), Vec::<i32>::new());
    assert_eq!(items.slice(100, 2), Vec::<i32>::new());
}

#[test]
fn test_slice_limit_past_end() {
    let items = [1, 2, 3];
    assert_eq!(items.slice(1, 100), vec![2, 3]);
}

#[test]
fn test_slice_preserves_order() {
    let items = ["a", "b", "c", "d"];
    assert_eq!(items.slice(1, 3), vec!["b", "c", "d"]);
}

// ============================================================================
// Vec Backend Tests
// ============================================================================

#[test]
fn test_vec_delegates_to_slice() {
    let items = vec!["x".to_string(), "y".to_string(), "z".to_string()];

    assert_eq!(items.count(), 3);
    assert_eq!(items.slice(1, 1), vec!["y".to_string()]);
}

#[test]
fn test_empty_vec() {
    let items: Vec<i32> = Vec::new();

    assert_eq!(items.count(), 0);
    assert!(items.slice(0, 10).is_empty());
}

// ============================================================================
// Reference Impl Tests
// ============================================================================

#[test]
fn test_reference_delegates() {
    let items = vec![1, 2, 3];
    let by_ref = &items;

    assert_eq!(DataSource::count(&by_ref), 3);
    assert_eq!(DataSource::slice(&by_ref, 0, 2), vec![1, 2]);
}

// ============================================================================
// Custom Source Tests
// ============================================================================

/// A source that generates its elements on demand
struct Range(usize);

impl DataSource for Range {
    type Item = usize;

    fn count(&self) -> usize {
        self.0
    }

    fn slice(&self, offset: usize, limit: usize) -> Vec<usize> {
        (0..self.0).skip(offset).take(limit).collect()
    }
}

#[test]
fn test_custom_source() {
    let range = Range(10);

    assert_eq!(range.count(), 10);
    assert_eq!(range.slice(8, 5), vec![8, 9]);
}
