//! # doctex
//!
//! Translates docutils-style document trees into LaTeX.
//!
//! ## Features
//!
//! - Escapes text for LaTeX and keeps literal blocks verbatim
//! - Sections, tables, lists, footnotes, index entries and cross-references
//! - Object description environments (`funcdesc`, `classdesc`, ...)
//! - Pluggable code highlighting and image path resolution
//! - Recoverable problems are reported as [`Warning`]s, not errors
//!
//! ## Quick Start
//!
//! ```no_run
//! use doctex::export::{Exporter, LatexExporter};
//!
//! let root = doctex::import::read_document("tree.json")?;
//! let mut out = std::fs::File::create("manual.tex")?;
//! LatexExporter::new().export(&root, &mut out)?;
//! # Ok::<(), doctex::Error>(())
//! ```
//!
//! ## Working with Trees
//!
//! Trees can also be built in code and translated to a body only:
//!
//! ```
//! use doctex::{Kind, Node, TranslateOptions, translate};
//!
//! let root = Node::new(Kind::Document).with_child(
//!     Node::new(Kind::Paragraph).with_child(Node::text("50% off")),
//! );
//! let translation = translate(&root, &TranslateOptions::default());
//! assert!(translation.body.ends_with("\n50\\% off\n"));
//! ```

pub mod error;
pub mod export;
pub mod highlight;
pub mod import;
pub mod latex;
pub mod model;
pub mod resources;

pub use error::{Error, Result};
pub use export::{Exporter, LatexConfig, LatexExporter};
pub use highlight::{Highlighter, VerbatimHighlighter};
pub use latex::{TranslateOptions, Translation, Translator, Warning, translate};
pub use model::{IndexEntry, Kind, Node};
pub use resources::{IdentityResolver, ResourceResolver};

/// Translate a JSON document tree into a complete LaTeX document.
pub fn translate_json(json: &str, config: LatexConfig) -> Result<(String, Vec<Warning>)> {
    let root = import::parse_document(json)?;
    Ok(LatexExporter::with_config(config).render(&root))
}
