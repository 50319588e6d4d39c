//! Serde tests for the wire types.
//!
//! These verify that the models match the API's actual field naming (snake
//! case resources, camelCase paging envelope, Mongo operators in filters)
//! and that nullable fields decode as `None` rather than failing.

use crate::models::{
    LaunchFilter, LaunchPage, LaunchQuery, LaunchQueryFilter, SortDirection, SortOrder,
};

// ============================================================================
// Sort types
// ============================================================================

#[test]
fn sort_direction_wire_values() {
    assert_eq!(serde_json::to_string(&SortDirection::Asc).unwrap(), r#""asc""#);
    assert_eq!(serde_json::to_string(&SortDirection::Desc).unwrap(), r#""desc""#);
}

#[test]
fn sort_order_roundtrip() {
    for order in [SortOrder::Ascending, SortOrder::Descending] {
        let json = serde_json::to_string(&order).unwrap();
        let back: SortOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(order, back);
    }
}

#[test]
fn sort_order_rejects_unknown_value() {
    let result: Result<SortOrder, _> = serde_json::from_str(r#""sideways""#);
    assert!(result.is_err());
}

// ============================================================================
// Query body
// ============================================================================

#[test]
fn query_body_matches_wire_shape() {
    let filter = LaunchFilter {
        year: Some(2020),
        successful_only: true,
    };
    let query = LaunchQuery::page(filter.to_query_filter(), 2, 25, SortDirection::Desc);
    let json = serde_json::to_value(&query).unwrap();

    assert_eq!(json["options"]["page"], 2);
    assert_eq!(json["options"]["limit"], 25);
    assert_eq!(json["options"]["sort"]["date_utc"], "desc");
    assert_eq!(json["query"]["success"], true);
    assert_eq!(json["query"]["date_utc"]["$gte"], "2020-01-01T00:00:00.000Z");
}

#[test]
fn filter_roundtrip_preserves_bounds() {
    let filter = LaunchFilter {
        year: Some(2019),
        successful_only: false,
    }
    .to_query_filter();
    let json = serde_json::to_string(&filter).unwrap();
    let back: LaunchQueryFilter = serde_json::from_str(&json).unwrap();
    assert_eq!(filter, back);
}

// ============================================================================
// Page envelope
// ============================================================================

#[test]
fn page_envelope_decodes_camel_case() {
    let json = r#"{
        "docs": [],
        "totalDocs": 205,
        "limit": 10,
        "totalPages": 21,
        "page": 3,
        "pagingCounter": 21,
        "hasPrevPage": true,
        "hasNextPage": true,
        "prevPage": 2,
        "nextPage": 4
    }"#;
    let page: LaunchPage = serde_json::from_str(json).unwrap();
    assert_eq!(page.total_docs, 205);
    assert_eq!(page.total_pages, 21);
    assert_eq!(page.page, 3);
    assert_eq!(page.next_page, Some(4));
    assert!(page.has_next_page);
    assert!(page.is_consistent());
}

#[test]
fn last_page_has_null_next_page() {
    let json = r#"{
        "docs": [],
        "totalDocs": 5,
        "limit": 10,
        "totalPages": 1,
        "page": 1,
        "pagingCounter": 1,
        "hasPrevPage": false,
        "hasNextPage": false,
        "prevPage": null,
        "nextPage": null
    }"#;
    let page: LaunchPage = serde_json::from_str(json).unwrap();
    assert!(!page.has_next_page);
    assert_eq!(page.next_page, None);
    assert!(page.is_consistent());
}
