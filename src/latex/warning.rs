//! Recoverable translation anomalies.

use thiserror::Error;

/// Something in the tree could not be rendered as-is.
///
/// The translator logs each warning, records it on the
/// [`Translation`](super::Translation) and carries on with the rest of the
/// document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    #[error("document title is not a single text node")]
    ComplexTitle,

    #[error("encountered title node not in section, topic or sidebar")]
    MisplacedTitle,

    #[error("table with {columns} columns, only 2 to 5 are supported; ignoring")]
    TableColumns { columns: usize },

    #[error("unknown index entry type {kind} found")]
    UnknownIndexEntry { kind: String },

    #[error("index entry of type {kind} needs {expected} `;`-separated parts: {text}")]
    MalformedIndexEntry {
        kind: String,
        text: String,
        expected: usize,
    },

    #[error("malformed reference target found: {uri}")]
    MalformedReference { uri: String },

    #[error("encountered rubric node not used for footnotes, content will be lost")]
    DroppedRubric,
}
