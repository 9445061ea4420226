//! Document tree model.
//!
//! This module contains:
//! - Node and kind types (one enum variant per supported element)
//! - Index entry tuples
//! - Reference destination parsing

mod links;
mod node;

// Re-export node types
pub use node::{IndexEntry, KIND_NAMES, Kind, Node};

// Re-export link types
pub use links::Link;
