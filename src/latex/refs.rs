//! Hyperlink anchors and reference wrappers.
//!
//! LaTeX's hyperref refuses duplicate destinations, so every anchor goes
//! through [`WrittenIds`]: an id is given a `\hypertarget` at most once per
//! translation, however many sections, targets or signatures carry it.

use std::collections::HashSet;

use crate::model::Link;

use super::escape::{Whitespace, escape_latex};

/// Ids that already received an anchor in this translation.
#[derive(Debug, Clone, Default)]
pub struct WrittenIds {
    ids: HashSet<String>,
}

impl WrittenIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id`; returns `true` if it was not written before.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.ids.contains(id) {
            return false;
        }
        self.ids.insert(id.to_string());
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of ids registered so far.
    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    /// An empty `\hypertarget` for `id`, if it has not been written yet.
    pub fn anchor(&mut self, id: &str) -> Option<String> {
        self.insert(id).then(|| hypertarget(id))
    }
}

/// Empty anchor: `\hypertarget{id}{}`.
pub fn hypertarget(id: &str) -> String {
    format!("\\hypertarget{{{id}}}{{}}")
}

/// Index targets are placed by makeindex itself and get no anchor.
fn is_index_target(id: &str) -> bool {
    id.starts_with("index-")
}

/// Opening and closing markup of an explicit target node.
///
/// Each newly registered id wraps the target's content in
/// `\hypertarget{id}{...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetWrap {
    pub open: String,
    pub close: String,
}

impl TargetWrap {
    /// Register `id` and wrap it if it is new.
    pub fn add(&mut self, written: &mut WrittenIds, id: &str) {
        if written.insert(id) && !is_index_target(id) {
            self.open.push_str(&format!("\\hypertarget{{{id}}}{{"));
            self.close.push('}');
        }
    }
}

/// How the text of a reference node is wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceWrap {
    /// Emit the children unwrapped.
    Bare,
    /// Emit `open`, the children, then `}`.
    Command(String),
    /// Unrecognised destination; emit the children unwrapped.
    Malformed(String),
}

/// Decide the wrapper for a reference with the given `refuri`.
pub fn reference_wrap(
    refuri: Option<&str>,
    in_title: bool,
    in_production_list: bool,
    whitespace: Whitespace,
) -> ReferenceWrap {
    if in_title {
        return ReferenceWrap::Bare;
    }
    match Link::parse(refuri) {
        Link::Missing => ReferenceWrap::Bare,
        Link::External(uri) => {
            ReferenceWrap::Command(format!("\\href{{{}}}{{", escape_latex(uri, whitespace)))
        }
        Link::Internal(id) => ReferenceWrap::Command(format!("\\hyperlink{{{id}}}{{")),
        Link::GrammarToken if in_production_list => ReferenceWrap::Command("\\token{".into()),
        Link::GrammarToken => ReferenceWrap::Command("\\grammartoken{".into()),
        Link::Unknown(uri) => ReferenceWrap::Malformed(uri.to_string()),
    }
}
