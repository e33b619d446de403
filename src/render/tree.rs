//! Typed field accessors over untyped render trees
//!
//! A render tree is a plain JSON object; its field names are the de facto
//! schema. These helpers perform the per-field presence and kind checks and
//! produce stable, greppable error messages naming the offending field.

use serde_json::{Map, Value};
use thiserror::Error;

/// A render tree node: ordered string keys to heterogeneous values
pub type Tree = Map<String, Value>;

/// Structural mismatch found while reading a tree field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("missing required field '{field}'")]
    MissingField { field: String },

    #[error("field '{field}' must be {expected}")]
    WrongKind {
        field: String,
        /// Expected kind with article, e.g. "a string", "an array"
        expected: &'static str,
    },

    #[error("render tree must be an object")]
    NotAnObject,
}

/// View a value as a tree node
pub fn as_object(value: &Value) -> Result<&Tree, TreeError> {
    value.as_object().ok_or(TreeError::NotAnObject)
}

/// Read a required string field
pub fn require_str<'a>(tree: &'a Tree, field: &str) -> Result<&'a str, TreeError> {
    match tree.get(field) {
        None | Some(Value::Null) => Err(TreeError::MissingField {
            field: field.to_string(),
        }),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(TreeError::WrongKind {
            field: field.to_string(),
            expected: "a string",
        }),
    }
}

/// Read an optional string field; present-but-wrong-kind is still an error
pub fn optional_str<'a>(tree: &'a Tree, field: &str) -> Result<Option<&'a str>, TreeError> {
    match tree.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(TreeError::WrongKind {
            field: field.to_string(),
            expected: "a string",
        }),
    }
}

/// Read a required array field
pub fn require_array<'a>(tree: &'a Tree, field: &str) -> Result<&'a Vec<Value>, TreeError> {
    match tree.get(field) {
        None | Some(Value::Null) => Err(TreeError::MissingField {
            field: field.to_string(),
        }),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(TreeError::WrongKind {
            field: field.to_string(),
            expected: "an array",
        }),
    }
}

/// Read an optional object field; present-but-wrong-kind is still an error
pub fn optional_object<'a>(tree: &'a Tree, field: &str) -> Result<Option<&'a Tree>, TreeError> {
    match tree.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(obj)) => Ok(Some(obj)),
        Some(_) => Err(TreeError::WrongKind {
            field: field.to_string(),
            expected: "an object",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: Value) -> Tree {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_require_str_present() {
        let t = tree(json!({"title": "Hello"}));
        assert_eq!(require_str(&t, "title"), Ok("Hello"));
    }

    #[test]
    fn test_require_str_missing_names_field() {
        let t = tree(json!({}));
        let err = require_str(&t, "title").unwrap_err();
        assert_eq!(err.to_string(), "missing required field 'title'");
    }

    #[test]
    fn test_require_str_null_counts_as_missing() {
        let t = tree(json!({"title": null}));
        assert!(matches!(
            require_str(&t, "title"),
            Err(TreeError::MissingField { .. })
        ));
    }

    #[test]
    fn test_require_str_wrong_kind_message() {
        let t = tree(json!({"title": 42}));
        let err = require_str(&t, "title").unwrap_err();
        assert_eq!(err.to_string(), "field 'title' must be a string");
    }

    #[test]
    fn test_optional_str_absent_is_ok_none() {
        let t = tree(json!({}));
        assert_eq!(optional_str(&t, "subtitle"), Ok(None));
    }

    #[test]
    fn test_optional_str_wrong_kind_is_error() {
        let t = tree(json!({"subtitle": []}));
        assert!(matches!(
            optional_str(&t, "subtitle"),
            Err(TreeError::WrongKind { .. })
        ));
    }

    #[test]
    fn test_require_array_wrong_kind_message() {
        let t = tree(json!({"items": "oops"}));
        let err = require_array(&t, "items").unwrap_err();
        assert_eq!(err.to_string(), "field 'items' must be an array");
    }

    #[test]
    fn test_as_object_rejects_scalar() {
        assert_eq!(as_object(&json!("nope")), Err(TreeError::NotAnObject));
    }
}
