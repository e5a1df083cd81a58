use crate::error::CatalogError;
use serde_json::Value;

/// Enumerates the children of a document node as `(key, child)` pairs in key order.
///
/// The store exports keyed collections as objects, except when every key is a small
/// integer, in which case it collapses them into an array (with `null` holes). Both
/// shapes are accepted; `null` means the node does not exist and yields nothing.
pub(crate) fn children<'a>(
    node: &'a Value,
    what: &'static str,
) -> Result<Vec<(String, &'a Value)>, CatalogError> {
    match node {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().map(|(key, child)| (key.clone(), child)).collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            Ok(entries)
        },
        Value::Array(items) => Ok(items
            .iter()
            .enumerate()
            .filter(|(_, child)| !child.is_null())
            .map(|(index, child)| (index.to_string(), child))
            .collect()),
        other => Err(CatalogError::Snapshot {
            message: format!("expected a keyed collection, found {}", kind(other)).into(),
            context: Some(what.into()),
        }),
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objects_enumerate_in_key_order() {
        let node = json!({ "b": 2, "a": 1, "c": 3 });
        let keys: Vec<_> = children(&node, "test").unwrap().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn arrays_use_indices_and_skip_holes() {
        let node = json!([null, { "x": 1 }, null, { "x": 3 }]);
        let keys: Vec<_> = children(&node, "test").unwrap().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["1", "3"]);
    }

    #[test]
    fn null_is_empty_and_scalars_are_rejected() {
        assert!(children(&Value::Null, "test").unwrap().is_empty());
        let err = children(&json!("oops"), "experiences").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected snapshot shape (experiences): expected a keyed collection, found a string"
        );
    }
}
