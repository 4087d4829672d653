//! Metadata maps and the shallow merge applied along a scope chain.

use serde_json::{Map, Value};

/// Tag/label mapping bound to scoped loggers and merged into events.
pub type Metadata = Map<String, Value>;

/// Reserved key inside an event's `data` holding its metadata.
pub const METADATA_KEY: &str = "metadata";

/// Shallow merge: keys from `overlay` replace keys in `base` whole.
///
/// Nested objects are never merged field by field.
pub fn merge_metadata(base: &Metadata, overlay: &Metadata) -> Metadata {
    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Metadata {
        match value {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_overlay_wins_on_collision() {
        let merged = merge_metadata(&map(json!({"a": 1, "b": 2})), &map(json!({"b": 3})));
        assert_eq!(Value::Object(merged), json!({"a": 1, "b": 3}));
    }

    #[test]
    fn test_nested_values_replaced_whole() {
        let parent = map(json!({"user": {"id": 1, "name": "A"}}));
        let child = map(json!({"user": {"id": 2}}));
        let merged = merge_metadata(&parent, &child);
        assert_eq!(merged["user"], json!({"id": 2}));
    }

    #[test]
    fn test_merge_does_not_touch_inputs() {
        let base = map(json!({"a": 1}));
        let overlay = map(json!({"a": 2}));
        let _ = merge_metadata(&base, &overlay);
        assert_eq!(base["a"], json!(1));
    }
}
