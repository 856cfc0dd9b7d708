//! Tag normalization.
//!
//! Tags arrive either as an array of strings or as one comma-joined string,
//! depending on the endpoint. They are always rendered as a list and
//! submitted back as a trimmed, comma-joined string with empty entries
//! dropped. Normalize → serialize → normalize is idempotent.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept either wire shape and produce a clean tag list.
pub fn normalize_tags(value: &Value) -> Vec<String> {
    match value {
        Value::String(joined) => parse_tags(joined),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

/// Wire form for submission: trimmed, comma-joined, empties dropped.
pub fn serialize_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Serde adapter for record fields whose tag shape varies.
pub(crate) fn tags_lenient<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(de)?;
    Ok(normalize_tags(&value))
}

/// Split a comma-joined input (wire field or form text) into clean tags.
pub fn parse_tags(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn comma_string_splits_and_trims() {
        let tags = normalize_tags(&json!("politics,  economy , ,sports"));
        assert_eq!(tags, vec!["politics", "economy", "sports"]);
    }

    #[test]
    fn array_input_is_trimmed_and_filtered() {
        let tags = normalize_tags(&json!([" politics ", "", "economy"]));
        assert_eq!(tags, vec!["politics", "economy"]);
    }

    #[test]
    fn non_tag_shapes_yield_empty() {
        assert!(normalize_tags(&json!(null)).is_empty());
        assert!(normalize_tags(&json!(42)).is_empty());
        assert!(normalize_tags(&json!({"tags": "a,b"})).is_empty());
    }

    #[test]
    fn round_trip_is_idempotent() {
        for input in [json!("a, b,c ,"), json!(["a", " b", "c"]), json!("")] {
            let once = normalize_tags(&input);
            let again = normalize_tags(&json!(serialize_tags(&once)));
            assert_eq!(once, again);
        }
    }

    #[test]
    fn serialize_drops_empty_entries() {
        let tags = vec!["a".to_string(), "  ".to_string(), "b".to_string()];
        assert_eq!(serialize_tags(&tags), "a, b");
    }
}
