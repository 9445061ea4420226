//! JSON document trees.
//!
//! A node is an object with a `kind` tag, the kind's attributes and an
//! optional `children` array:
//!
//! ```json
//! {"kind": "paragraph", "children": [{"kind": "text", "text": "Hi"}]}
//! ```
//!
//! Every node kind in the tree is checked before any typed parsing happens,
//! so an unknown kind anywhere is reported as [`Error::UnsupportedNode`]
//! with its name rather than as a generic deserialization error.

use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{Kind, Node};

/// Parse a document tree from JSON text.
pub fn parse_document(json: &str) -> Result<Node> {
    let value: Value = serde_json::from_str(json)?;
    from_value(value)
}

/// Convert an already parsed JSON value into a document tree.
pub fn from_value(value: Value) -> Result<Node> {
    check_kinds(&value, "$")?;
    Ok(serde_json::from_value(value)?)
}

/// Read a document tree from a JSON file.
pub fn read_document(path: impl AsRef<Path>) -> Result<Node> {
    let path = path.as_ref();
    log::debug!("reading document tree from {}", path.display());
    let json = std::fs::read_to_string(path)?;
    parse_document(&json)
}

/// Walk the raw tree and reject unknown or missing kinds.
fn check_kinds(value: &Value, at: &str) -> Result<()> {
    let Value::Object(fields) = value else {
        return Err(Error::InvalidDocument(format!("{at}: node is not an object")));
    };

    match fields.get("kind") {
        Some(Value::String(kind)) if Kind::is_known(kind) => {}
        Some(Value::String(kind)) => {
            return Err(Error::UnsupportedNode { kind: kind.clone() });
        }
        Some(_) => {
            return Err(Error::InvalidDocument(format!("{at}: `kind` is not a string")));
        }
        None => {
            return Err(Error::InvalidDocument(format!("{at}: node has no `kind`")));
        }
    }

    match fields.get("children") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Array(children)) => {
            for (i, child) in children.iter().enumerate() {
                check_kinds(child, &format!("{at}.children[{i}]"))?;
            }
            Ok(())
        }
        Some(_) => Err(Error::InvalidDocument(format!(
            "{at}: `children` is not an array"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_tree() {
        let node = parse_document(
            r#"{"kind": "document", "children": [
                {"kind": "paragraph", "children": [{"kind": "text", "text": "Hi"}]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(node.kind, Kind::Document);
        assert_eq!(node.astext(), "Hi");
    }

    #[test]
    fn test_nested_unknown_kind_is_fatal() {
        let err = parse_document(
            r#"{"kind": "document", "children": [
                {"kind": "section", "children": [{"kind": "math_block"}]}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnsupportedNode { kind } if kind == "math_block"));
    }

    #[test]
    fn test_missing_kind_reports_position() {
        let err = parse_document(r#"{"kind": "document", "children": [{"text": "x"}]}"#)
            .unwrap_err();
        match err {
            Error::InvalidDocument(msg) => assert!(msg.starts_with("$.children[0]"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_children_must_be_array() {
        let err = parse_document(r#"{"kind": "document", "children": {}}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidDocument(_)));
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(parse_document("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_bad_attribute_type() {
        let err = parse_document(r#"{"kind": "tgroup", "cols": "two"}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
