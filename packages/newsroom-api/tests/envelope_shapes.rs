//! End-to-end checks of the normalization contract: the same list comes out
//! of every documented envelope shape, and garbage degrades to an empty
//! envelope instead of an error.

use newsroom_api::envelope::{extract_detail, extract_list};
use newsroom_api::tags::{normalize_tags, serialize_tags};
use newsroom_api::types::{Article, Category, Paginated};
use serde_json::{json, Value};

fn articles_fixture() -> Value {
    json!([
        {"id": 1, "title": "City budget passes", "author": "Dana Reyes", "views": 120},
        {"id": 2, "title": "Transit strike ends"}
    ])
}

#[test]
fn all_three_envelope_shapes_yield_the_same_items() {
    let shapes = [
        json!({"success": true, "data": {"data": {"articles": articles_fixture()}}}),
        json!({"success": true, "data": {"articles": articles_fixture()}}),
        json!({"success": true, "data": articles_fixture()}),
        articles_fixture(),
    ];

    for body in shapes {
        let out: Paginated<Article> = extract_list(&body, &["articles"], None);
        let ids: Vec<i64> = out.items.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2], "shape failed: {body}");
        assert_eq!(out.pagination.total_items, 2);
    }
}

#[test]
fn pagination_block_is_honored_when_present() {
    let body = json!({
        "success": true,
        "data": {
            "articles": articles_fixture(),
            "pagination": {
                "currentPage": 1,
                "totalPages": 3,
                "totalItems": 25,
                "hasNext": true,
                "hasPrevious": false
            }
        }
    });
    let out: Paginated<Article> = extract_list(&body, &["articles"], Some(1));
    assert_eq!(out.pagination.total_items, 25);
    assert!(out.pagination.has_next);
    assert!(!out.pagination.has_previous);
}

#[test]
fn bare_empty_array_is_an_empty_success() {
    let out: Paginated<Article> = extract_list(&json!([]), &["articles"], None);
    assert!(out.items.is_empty());
    assert_eq!(out.pagination.total_items, 0);
}

#[test]
fn garbage_shapes_never_panic() {
    let bodies = [
        json!(null),
        json!("just a string"),
        json!(12345),
        json!({"data": null}),
        json!({"data": {"data": null}}),
        json!({"unrelated": {"articles": "not a list"}}),
    ];
    for body in bodies {
        let out: Paginated<Article> = extract_list(&body, &["articles"], Some(2));
        assert!(out.items.is_empty(), "expected empty for {body}");
        assert_eq!(out.pagination.current_page, 2);
        assert_eq!(out.pagination.total_items, 0);
    }
}

#[test]
fn detail_falls_back_through_the_same_order() {
    let nested = json!({"data": {"data": {"category": {"id": 1, "name": "Local"}}}});
    let flat = json!({"data": {"id": 1, "name": "Local"}});
    let bare = json!({"id": 1, "name": "Local"});

    for body in [nested, flat, bare] {
        let found: Option<Category> = extract_detail(&body, &["category"]);
        assert_eq!(found.unwrap().name, "Local", "shape failed");
    }
}

#[test]
fn tag_round_trip_is_stable_for_both_wire_shapes() {
    for input in [json!("breaking, local , "), json!(["breaking", " local "])] {
        let first = normalize_tags(&input);
        let second = normalize_tags(&json!(serialize_tags(&first)));
        assert_eq!(first, second);
        assert_eq!(first, vec!["breaking", "local"]);
    }
}
