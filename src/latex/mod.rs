//! LaTeX body generation.
//!
//! [`translate`] walks a [`Node`](crate::model::Node) tree and returns a
//! [`Translation`]: the document body plus the facts the document
//! template needs (captured title, graphics and index usage) and the
//! warnings raised along the way.
//!
//! The walker delegates to small emitters, one per concern:
//!
//! - [`escape`]: reserved-character escaping
//! - [`refs`]: hypertargets and hyperlinks
//! - [`index`]: index entry commands
//! - [`desc`]: object description signatures
//! - [`table`]: fixed-width table environments
//! - [`verbatim`]: literal blocks through a [`Highlighter`](crate::highlight::Highlighter)
//! - [`image`]: `\includegraphics` wrappers
//! - [`sectioning`]: title capture and heading depth

mod context;
pub mod desc;
pub mod escape;
pub mod image;
pub mod index;
pub mod refs;
pub mod sectioning;
pub mod table;
mod translate;
pub mod verbatim;
mod warning;

pub use context::{Closer, Step};
pub use escape::{Whitespace, escape_latex};
pub use translate::{TranslateOptions, Translation, Translator, translate};
pub use verbatim::HighlightSettings;
pub use warning::Warning;
