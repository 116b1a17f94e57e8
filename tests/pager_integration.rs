//! Integration tests for end-to-end paging
//!
//! Tests the full flow: JSON dataset file → data source → pager navigation.

use pagekit::cli::load_dataset;
use pagekit::{Error, PageRequest, Pager, TOTAL_PAGES_DISABLED};
use serde_json::json;

// ============================================================================
// Navigation Integration Tests
// ============================================================================

#[test]
fn test_walk_visits_every_element_exactly_once() {
    let data: Vec<i32> = (0..57).collect();
    let mut pager = Pager::new(&data, 1, 10);

    let mut seen = pager.paged_result().to_vec();
    let mut pages = 1_i64;
    while pager.has_more_pages() {
        pager.next_page();
        seen.extend_from_slice(pager.paged_result());
        pages += 1;
    }

    assert_eq!(seen, data);
    assert_eq!(pages, pager.total_pages());
}

#[test]
fn test_back_and_forth_lands_on_the_same_page() {
    let data: Vec<i32> = (0..30).collect();
    let mut pager = Pager::new(&data, 2, 10);

    pager.next_page().previous_page();

    assert_eq!(pager.page(), 2);
    assert_eq!(
        pager.paged_result(),
        &[10, 11, 12, 13, 14, 15, 16, 17, 18, 19]
    );
}

#[test]
fn test_walk_with_counting_disabled() {
    let data: Vec<i32> = (0..25).collect();
    let mut pager = Pager::with_options(&data, 1, 10, true);

    let mut pages = 1;
    while pager.has_more_pages() {
        pager.next_page();
        pages += 1;
    }

    assert_eq!(pages, 3);
    assert_eq!(pager.total_pages(), TOTAL_PAGES_DISABLED);
}

#[test]
fn test_builds_from_deserialized_request() {
    let data: Vec<String> = (0..12).map(|i| format!("row-{i}")).collect();
    let request: PageRequest = serde_json::from_str(r#"{"page": 2, "per_page": 5}"#).unwrap();

    let pager = Pager::from_request(Some(&data), &request).unwrap();

    assert_eq!(pager.page(), 2);
    assert_eq!(
        pager.paged_result(),
        &["row-5", "row-6", "row-7", "row-8", "row-9"]
    );
}

// ============================================================================
// Dataset File Integration Tests
// ============================================================================

#[test]
fn test_loads_and_pages_a_dataset_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let rows: Vec<_> = (1..=15).map(|i| json!({"id": i})).collect();
    std::fs::write(&path, serde_json::to_string(&rows).unwrap()).unwrap();

    let data = load_dataset(&path).unwrap();
    let mut pager = Pager::new(&data, 1, 12);

    assert_eq!(pager.total_pages(), 2);
    assert_eq!(pager.paged_result().len(), 12);
    assert!(pager.has_more_pages());

    pager.next_page();
    assert_eq!(pager.paged_result().len(), 3);
    assert_eq!(pager.paged_result()[0]["id"], 13);
    assert!(!pager.has_more_pages());
}

#[test]
fn test_missing_dataset_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let result = load_dataset(&path);

    assert!(matches!(result, Err(Error::FileNotFound { .. })));
}

#[test]
fn test_malformed_dataset_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "[1, 2,").unwrap();

    let result = load_dataset(&path);

    assert!(matches!(result, Err(Error::JsonParse(_))));
}

#[test]
fn test_non_array_dataset_is_an_invalid_argument() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("object.json");
    std::fs::write(&path, r#"{"items": [1, 2, 3]}"#).unwrap();

    let result = load_dataset(&path);

    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}
