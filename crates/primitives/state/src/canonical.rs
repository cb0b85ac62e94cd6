use serde::Serialize;
use serde_json::{Map, Value};

/// Serializes a record into a deterministic JSON string with object keys sorted at every depth.
pub fn canonical_json<T: Serialize>(record: &T) -> Result<String, serde_json::Error> {
    let value = serde_json::to_value(record)?;
    serde_json::to_string(&sort_keys(value))
}

/// Structural equality of two records through their canonical serialization.
///
/// This is what decides whether an upsert is a no-op. A record that fails to serialize is never
/// considered equal to anything.
pub fn is_same_record<T: Serialize>(a: &T, b: &T) -> bool {
    match (canonical_json(a), canonical_json(b)) {
        (Ok(a), Ok(b)) => a == b,
        (Err(err), _) | (_, Err(err)) => {
            tracing::warn!("Failed to serialize record for comparison: {err:#}");
            false
        }
    }
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            Value::Object(entries.into_iter().map(|(k, v)| (k, sort_keys(v))).collect::<Map<_, _>>())
        }
        Value::Array(values) => Value::Array(values.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_json_is_field_order_independent() {
        let a = json!({ "b": 1, "a": { "d": [ { "y": 1, "x": 2 } ], "c": null } });
        let b = json!({ "a": { "c": null, "d": [ { "x": 2, "y": 1 } ] }, "b": 1 });
        assert_eq!(canonical_json(&a).unwrap(), canonical_json(&b).unwrap());
        assert_eq!(canonical_json(&a).unwrap(), r#"{"a":{"c":null,"d":[{"x":2,"y":1}]},"b":1}"#);
        assert!(is_same_record(&a, &b));
    }

    #[test]
    fn test_is_same_record_detects_changes() {
        let a = json!({ "address": "0x1", "addressIndex": 0 });
        let b = json!({ "address": "0x1", "addressIndex": 1 });
        assert!(!is_same_record(&a, &b));
        // Array order is meaningful.
        assert!(!is_same_record(&json!([1, 2]), &json!([2, 1])));
    }
}
