//! Response envelope normalization.
//!
//! The backend wraps payloads inconsistently across endpoints: some return
//! `{success, data: {data: {articles: [...]}}}`, some `{success, data: [...]}`,
//! and some a bare array or object. The extractors here try each candidate
//! shape in a fixed priority order and degrade to an empty result instead of
//! failing the page. Shape mismatches are logged, never raised — only the
//! transport layer produces errors.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{Paginated, Pagination};

/// Payload containers in lookup order: `data.data`, then `data`, then the
/// body itself.
fn candidates(body: &Value) -> Vec<&Value> {
    let mut out = Vec::with_capacity(3);
    if let Some(inner) = body.get("data") {
        if let Some(double) = inner.get("data") {
            out.push(double);
        }
        out.push(inner);
    }
    out.push(body);
    out
}

/// Find the raw list inside a container: the container itself when it is an
/// array, otherwise the first matching named field, with `items` as the
/// generic last resort.
fn find_items<'a>(container: &'a Value, names: &[&str]) -> Option<&'a Value> {
    match container {
        Value::Array(_) => Some(container),
        Value::Object(map) => names
            .iter()
            .find_map(|name| map.get(*name))
            .or_else(|| map.get("items")),
        _ => None,
    }
}

/// Coerce whatever the upstream field held into a list of raw items. Null
/// becomes empty; a single object becomes a one-element list.
pub fn coerce_items(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        Value::Object(_) => vec![value.clone()],
        _ => Vec::new(),
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPagination {
    current_page: Option<u32>,
    total_pages: Option<u32>,
    total_items: Option<u64>,
    has_next: Option<bool>,
    has_previous: Option<bool>,
}

/// A pagination block may be absent, partial, or oddly typed. Missing fields
/// are derived: `total_items` from the item count, the cursors from the
/// page/total pair.
fn resolve_pagination(
    raw: Option<&Value>,
    item_count: usize,
    requested_page: Option<u32>,
) -> Pagination {
    let raw: RawPagination = raw
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_default();

    let current_page = raw.current_page.or(requested_page).unwrap_or(1);
    let total_pages = raw.total_pages.unwrap_or(1).max(1);
    Pagination {
        current_page,
        total_pages,
        total_items: raw.total_items.unwrap_or(item_count as u64),
        has_next: raw.has_next.unwrap_or(current_page < total_pages),
        has_previous: raw.has_previous.unwrap_or(current_page > 1),
    }
}

fn find_pagination<'a>(containers: &[&'a Value]) -> Option<&'a Value> {
    containers
        .iter()
        .find_map(|container| container.get("pagination"))
}

/// Extract a list of `T` from any of the documented envelope shapes.
///
/// Lookup order: `data.data.<name>`, `data.<name>` / `data` as a bare array,
/// then the body itself. When nothing matches, the result is an empty list
/// with synthesized pagination — never an error. Individual entries that fail
/// to deserialize are dropped and logged rather than poisoning the page.
pub fn extract_list<T: DeserializeOwned>(
    body: &Value,
    names: &[&str],
    requested_page: Option<u32>,
) -> Paginated<T> {
    let containers = candidates(body);

    for container in &containers {
        let Some(raw_items) = find_items(container, names) else {
            continue;
        };
        let items: Vec<T> = coerce_items(raw_items)
            .into_iter()
            .filter_map(|raw| match serde_json::from_value(raw) {
                Ok(item) => Some(item),
                Err(err) => {
                    tracing::warn!(%err, "dropping malformed list entry");
                    None
                }
            })
            .collect();
        let pagination = resolve_pagination(find_pagination(&containers), items.len(), requested_page);
        return Paginated { items, pagination };
    }

    tracing::warn!(expected = ?names, "no recognizable list payload; rendering empty");
    Paginated::empty(requested_page)
}

/// Extract a single record, trying the named field in each container before
/// the container itself. `None` means "not found" — callers render a
/// not-found state rather than crash.
pub fn extract_detail<T: DeserializeOwned>(body: &Value, names: &[&str]) -> Option<T> {
    for container in candidates(body) {
        if let Value::Object(map) = container {
            for name in names {
                if let Some(raw) = map.get(*name) {
                    if let Ok(item) = serde_json::from_value(raw.clone()) {
                        return Some(item);
                    }
                }
            }
            if let Ok(item) = serde_json::from_value(container.clone()) {
                return Some(item);
            }
        }
    }
    tracing::debug!(expected = ?names, "no recognizable detail payload");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Article;
    use serde_json::json;

    fn article(id: i64) -> Value {
        json!({"id": id, "title": format!("Article {id}")})
    }

    #[test]
    fn nested_named_envelope() {
        let body = json!({
            "success": true,
            "data": {"data": {"articles": [article(1), article(2)]}}
        });
        let out: Paginated<Article> = extract_list(&body, &["articles"], None);
        assert_eq!(out.items.len(), 2);
        assert_eq!(out.pagination.total_items, 2);
    }

    #[test]
    fn singly_nested_named_envelope_with_pagination() {
        let body = json!({
            "success": true,
            "data": {
                "articles": [article(1)],
                "pagination": {"currentPage": 2, "totalPages": 5, "totalItems": 41}
            }
        });
        let out: Paginated<Article> = extract_list(&body, &["articles"], Some(2));
        assert_eq!(out.items.len(), 1);
        assert_eq!(out.pagination.total_items, 41);
        assert!(out.pagination.has_next);
        assert!(out.pagination.has_previous);
    }

    #[test]
    fn data_as_bare_array() {
        let body = json!({"success": true, "data": [article(1), article(2), article(3)]});
        let out: Paginated<Article> = extract_list(&body, &["articles"], None);
        assert_eq!(out.items.len(), 3);
    }

    #[test]
    fn flat_bare_array() {
        let body = json!([article(9)]);
        let out: Paginated<Article> = extract_list(&body, &["articles"], None);
        assert_eq!(out.items.len(), 1);
        assert_eq!(out.pagination.total_items, 1);
    }

    #[test]
    fn empty_bare_array_yields_zero_totals() {
        let body = json!([]);
        let out: Paginated<Article> = extract_list(&body, &["articles"], None);
        assert!(out.items.is_empty());
        assert_eq!(out.pagination.total_items, 0);
        assert!(!out.pagination.has_next);
    }

    #[test]
    fn garbage_shape_degrades_to_empty() {
        let body = json!({"success": false, "weird": {"stuff": 42}});
        let out: Paginated<Article> = extract_list(&body, &["articles"], Some(3));
        assert!(out.items.is_empty());
        assert_eq!(out.pagination.current_page, 3);
        assert_eq!(out.pagination.total_pages, 1);
        assert_eq!(out.pagination.total_items, 0);
    }

    #[test]
    fn null_named_field_is_an_empty_list() {
        let body = json!({"data": {"articles": null}});
        let out: Paginated<Article> = extract_list(&body, &["articles"], None);
        assert!(out.items.is_empty());
    }

    #[test]
    fn single_object_is_coerced_to_one_element() {
        let body = json!({"data": {"articles": article(5)}});
        let out: Paginated<Article> = extract_list(&body, &["articles"], None);
        assert_eq!(out.items.len(), 1);
        assert_eq!(out.items[0].id, 5);
    }

    #[test]
    fn malformed_entries_are_dropped_not_fatal() {
        let body = json!({"data": {"articles": [article(1), {"no_id": true}, article(2)]}});
        let out: Paginated<Article> = extract_list(&body, &["articles"], None);
        assert_eq!(out.items.len(), 2);
    }

    #[test]
    fn detail_nested_named() {
        let body = json!({"data": {"data": {"article": article(7)}}});
        let found: Option<Article> = extract_detail(&body, &["article"]);
        assert_eq!(found.unwrap().id, 7);
    }

    #[test]
    fn detail_flat_object() {
        let body = json!({"data": article(8)});
        let found: Option<Article> = extract_detail(&body, &["article"]);
        assert_eq!(found.unwrap().id, 8);
    }

    #[test]
    fn detail_missing_is_none() {
        let body = json!({"data": {"message": "gone"}});
        let found: Option<Article> = extract_detail(&body, &["article"]);
        assert!(found.is_none());
    }
}
