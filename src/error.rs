//! Error types for doctex operations.

use thiserror::Error;

/// Errors that abort a translation.
///
/// Anything recoverable is reported as a [`crate::latex::Warning`] instead
/// and never reaches this type.
#[derive(Error, Debug)]
pub enum Error {
    /// The input tree contains a node kind with no emission rule.
    #[error("unsupported node kind: {kind}")]
    UnsupportedNode { kind: String },

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
