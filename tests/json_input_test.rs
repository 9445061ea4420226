//! Document loading tests.
//!
//! Covers reading trees from disk and the all-or-nothing rejection of
//! unknown node kinds.

use std::io::Write;

use doctex::import::{parse_document, read_document};
use doctex::{Error, Kind};
use tempfile::NamedTempFile;

fn write_temp(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_read_document_from_file() {
    let file = write_temp(include_str!("fixtures/library.json"));

    let root = read_document(file.path()).unwrap();

    assert_eq!(root.kind, Kind::Document);
    assert_eq!(root.children.len(), 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_document(dir.path().join("absent.json")).unwrap_err();

    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_unknown_kind_deep_in_tree_aborts() {
    let file = write_temp(
        r#"{"kind": "document", "children": [
            {"kind": "section", "children": [
                {"kind": "paragraph", "children": [
                    {"kind": "text", "text": "fine"},
                    {"kind": "math", "children": [{"kind": "text", "text": "x^2"}]}
                ]}
            ]}
        ]}"#,
    );

    let err = read_document(file.path()).unwrap_err();

    assert!(matches!(err, Error::UnsupportedNode { ref kind } if kind == "math"));
    assert_eq!(err.to_string(), "unsupported node kind: math");
}

#[test]
fn test_unknown_kind_aborts_full_translation() {
    let json = r#"{"kind": "document", "children": [{"kind": "tabular_col_spec"}]}"#;

    let result = doctex::translate_json(json, doctex::LatexConfig::default());

    assert!(matches!(result, Err(Error::UnsupportedNode { .. })));
}

#[test]
fn test_every_known_kind_loads() {
    for name in doctex::model::KIND_NAMES {
        let json = format!(r#"{{"kind": "{name}"}}"#);
        let node = parse_document(&json).unwrap();
        assert_eq!(node.kind.name(), *name);
    }
}

#[test]
fn test_attributes_default_when_absent() {
    let node = parse_document(r#"{"kind": "literal_block"}"#).unwrap();

    assert_eq!(
        node.kind,
        Kind::LiteralBlock {
            language: None,
            linenos: None
        }
    );
}

#[test]
fn test_four_field_index_entries_load_and_render() {
    let json = r#"{"kind": "document", "children": [
        {"kind": "index", "entries": [
            ["single", "os", "index-0", ""],
            ["pair", "built-in; module", "index-1", "main"]
        ]}
    ]}"#;

    let (doc, warnings) = doctex::translate_json(json, doctex::LatexConfig::default()).unwrap();

    assert!(warnings.is_empty());
    assert!(doc.contains("\\index{os}\\indexii{built-in}{module}"));
}
