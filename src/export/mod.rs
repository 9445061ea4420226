//! Export module for writing translated documents.
//!
//! Provides the `Exporter` trait and format-specific implementations.
//!
//! # Architecture
//!
//! Exporters use a builder pattern:
//! - `new()` creates an exporter with default configuration
//! - `with_config()` allows customization
//! - `export()` writes to any `Write` destination
//!
//! # Example
//!
//! ```no_run
//! use doctex::export::{Exporter, LatexConfig, LatexExporter};
//! use std::fs::File;
//!
//! let root = doctex::import::read_document("tree.json")?;
//! let mut file = File::create("output.tex")?;
//!
//! let config = LatexConfig::default().with_author("Guido");
//! let warnings = LatexExporter::with_config(config).export(&root, &mut file)?;
//! eprintln!("{} warnings", warnings.len());
//! # Ok::<(), doctex::Error>(())
//! ```

use std::io::Write;

use crate::error::Result;
use crate::latex::Warning;
use crate::model::Node;

mod latex;

pub use latex::{LatexConfig, LatexExporter};

/// Trait for exporting document trees to specific formats.
///
/// Exporters hold their configuration; `export` translates the tree and
/// writes the complete output, returning the recoverable problems met
/// along the way.
pub trait Exporter {
    /// Export the tree to the provided writer.
    ///
    /// The writer can be:
    /// - `std::fs::File` for disk output
    /// - `Vec<u8>` for in-memory output
    /// - Any other type implementing `Write`
    fn export<W: Write>(&self, root: &Node, writer: &mut W) -> Result<Vec<Warning>>;
}
