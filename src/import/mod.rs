//! Document tree importers.
//!
//! Only JSON is read today; other front-ends produce a [`Node`](crate::model::Node)
//! tree directly.

pub mod json;

pub use json::{from_value, parse_document, read_document};
