//! Document tree node types.
//!
//! The tree mirrors the docutils doctree: every element has a kind, a
//! kind-specific attribute set and an ordered list of children. Attributes
//! live on the [`Kind`] variant so the translator can match on them
//! directly.

use serde::{Deserialize, Serialize};

/// One element of the document tree.
///
/// On the wire a node is a flat JSON object: the `kind` tag, the kind's
/// attributes, and an optional `children` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(flatten)]
    pub kind: Kind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a childless node.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Create a text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Kind::Text { text: text.into() })
    }

    /// Append a child, builder style.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append children, builder style.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Plain text content of this subtree.
    ///
    /// Children of text elements are concatenated directly; children of
    /// other elements are separated by a blank line.
    pub fn astext(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Kind::Text { text } = &self.kind {
            out.push_str(text);
            return;
        }
        let separator = if self.kind.is_text_element() {
            ""
        } else {
            "\n\n"
        };
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            child.collect_text(out);
        }
    }

    /// Whether this node is a single text run.
    pub fn is_text(&self) -> bool {
        matches!(self.kind, Kind::Text { .. })
    }
}

/// One `(kind, text, target id)` index entry.
///
/// Deserializes from either an object or a `[kind, text, target_id]` array.
/// Arrays may carry a fourth `main` marker, which is kept but not rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub kind: String,
    pub text: String,
    #[serde(default)]
    pub target_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
}

impl IndexEntry {
    pub fn new(
        kind: impl Into<String>,
        text: impl Into<String>,
        target_id: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
            target_id: target_id.into(),
            main: None,
        }
    }
}

/// Node kind and its attributes.
///
/// Every attribute has a default so that `{"kind": "<name>"}` alone is a
/// valid node of any kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Kind {
    /// A top-level document. More than one may appear in a tree; the
    /// second starts the appendix.
    Document,
    Section {
        #[serde(default)]
        ids: Vec<String>,
    },
    Title,
    Paragraph,
    Text {
        #[serde(default)]
        text: String,
    },

    // Inline markup
    Emphasis,
    Strong,
    LiteralEmphasis,
    TitleReference,
    Literal,
    Problematic,
    Reference {
        #[serde(default)]
        refuri: Option<String>,
    },
    PendingXref,
    Target {
        #[serde(default)]
        ids: Vec<String>,
        #[serde(default)]
        refuri: Option<String>,
        #[serde(default)]
        refid: Option<String>,
        #[serde(default)]
        refname: Option<String>,
    },
    FootnoteReference,

    // Footnotes and asides
    Footnote,
    Label,
    Rubric,
    Topic,
    Sidebar,
    Glossary,
    Seealso,
    Note,
    Warning,
    Centered,
    Transition,

    // Grammar productions
    #[serde(rename = "productionlist")]
    ProductionList,
    Production {
        #[serde(default)]
        tokenname: String,
    },

    // Object descriptions
    Desc {
        #[serde(default)]
        desctype: String,
        #[serde(default)]
        noindex: bool,
    },
    DescSignature {
        #[serde(default)]
        ids: Vec<String>,
    },
    DescType,
    DescName,
    DescClassname,
    DescParameterlist,
    DescContent,
    Refcount,
    #[serde(rename = "versionmodified")]
    VersionModified {
        #[serde(default, rename = "type")]
        change: String,
        #[serde(default)]
        version: String,
    },
    Module {
        #[serde(default)]
        modname: String,
        #[serde(default)]
        synopsis: String,
        #[serde(default)]
        platform: Option<String>,
    },

    // Directive-only and passthrough nodes
    Index {
        #[serde(default)]
        entries: Vec<IndexEntry>,
    },
    Raw {
        #[serde(default)]
        format: String,
    },
    Comment,
    SubstitutionDefinition,
    #[serde(rename = "highlightlang")]
    HighlightLang {
        #[serde(default)]
        lang: String,
        #[serde(default)]
        linenothreshold: Option<usize>,
    },

    // Tables
    Table,
    #[serde(rename = "tgroup")]
    TableGroup {
        #[serde(default)]
        cols: usize,
    },
    Colspec,
    #[serde(rename = "thead")]
    TableHead,
    #[serde(rename = "tbody")]
    TableBody,
    Row,
    Entry,

    // Lists
    Acks,
    BulletList,
    EnumeratedList,
    ListItem,
    DefinitionList,
    DefinitionListItem,
    Term {
        #[serde(default)]
        ids: Vec<String>,
    },
    Classifier,
    Definition,
    FieldList,
    Field,
    FieldName {
        #[serde(default)]
        ids: Vec<String>,
    },
    FieldBody,
    OptionList,
    OptionListItem,
    OptionGroup,
    #[serde(rename = "option")]
    ProgramOption,
    OptionString,
    OptionArgument {
        #[serde(default)]
        delimiter: Option<String>,
    },
    Description,

    // Literal content
    LiteralBlock {
        #[serde(default)]
        language: Option<String>,
        #[serde(default)]
        linenos: Option<bool>,
    },
    DoctestBlock {
        #[serde(default)]
        language: Option<String>,
        #[serde(default)]
        linenos: Option<bool>,
    },
    LineBlock,
    Line,
    BlockQuote,
    Image {
        #[serde(default)]
        uri: String,
        #[serde(default)]
        scale: Option<f64>,
        #[serde(default)]
        width: Option<String>,
        #[serde(default)]
        align: Option<String>,
    },
    SystemMessage,
}

/// Wire names of every supported kind.
pub const KIND_NAMES: &[&str] = &[
    "document",
    "section",
    "title",
    "paragraph",
    "text",
    "emphasis",
    "strong",
    "literal_emphasis",
    "title_reference",
    "literal",
    "problematic",
    "reference",
    "pending_xref",
    "target",
    "footnote_reference",
    "footnote",
    "label",
    "rubric",
    "topic",
    "sidebar",
    "glossary",
    "seealso",
    "note",
    "warning",
    "centered",
    "transition",
    "productionlist",
    "production",
    "desc",
    "desc_signature",
    "desc_type",
    "desc_name",
    "desc_classname",
    "desc_parameterlist",
    "desc_content",
    "refcount",
    "versionmodified",
    "module",
    "index",
    "raw",
    "comment",
    "substitution_definition",
    "highlightlang",
    "table",
    "tgroup",
    "colspec",
    "thead",
    "tbody",
    "row",
    "entry",
    "acks",
    "bullet_list",
    "enumerated_list",
    "list_item",
    "definition_list",
    "definition_list_item",
    "term",
    "classifier",
    "definition",
    "field_list",
    "field",
    "field_name",
    "field_body",
    "option_list",
    "option_list_item",
    "option_group",
    "option",
    "option_string",
    "option_argument",
    "description",
    "literal_block",
    "doctest_block",
    "line_block",
    "line",
    "block_quote",
    "image",
    "system_message",
];

impl Kind {
    /// Whether `name` is the wire name of a supported kind.
    pub fn is_known(name: &str) -> bool {
        KIND_NAMES.contains(&name)
    }

    /// Wire name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Document => "document",
            Kind::Section { .. } => "section",
            Kind::Title => "title",
            Kind::Paragraph => "paragraph",
            Kind::Text { .. } => "text",
            Kind::Emphasis => "emphasis",
            Kind::Strong => "strong",
            Kind::LiteralEmphasis => "literal_emphasis",
            Kind::TitleReference => "title_reference",
            Kind::Literal => "literal",
            Kind::Problematic => "problematic",
            Kind::Reference { .. } => "reference",
            Kind::PendingXref => "pending_xref",
            Kind::Target { .. } => "target",
            Kind::FootnoteReference => "footnote_reference",
            Kind::Footnote => "footnote",
            Kind::Label => "label",
            Kind::Rubric => "rubric",
            Kind::Topic => "topic",
            Kind::Sidebar => "sidebar",
            Kind::Glossary => "glossary",
            Kind::Seealso => "seealso",
            Kind::Note => "note",
            Kind::Warning => "warning",
            Kind::Centered => "centered",
            Kind::Transition => "transition",
            Kind::ProductionList => "productionlist",
            Kind::Production { .. } => "production",
            Kind::Desc { .. } => "desc",
            Kind::DescSignature { .. } => "desc_signature",
            Kind::DescType => "desc_type",
            Kind::DescName => "desc_name",
            Kind::DescClassname => "desc_classname",
            Kind::DescParameterlist => "desc_parameterlist",
            Kind::DescContent => "desc_content",
            Kind::Refcount => "refcount",
            Kind::VersionModified { .. } => "versionmodified",
            Kind::Module { .. } => "module",
            Kind::Index { .. } => "index",
            Kind::Raw { .. } => "raw",
            Kind::Comment => "comment",
            Kind::SubstitutionDefinition => "substitution_definition",
            Kind::HighlightLang { .. } => "highlightlang",
            Kind::Table => "table",
            Kind::TableGroup { .. } => "tgroup",
            Kind::Colspec => "colspec",
            Kind::TableHead => "thead",
            Kind::TableBody => "tbody",
            Kind::Row => "row",
            Kind::Entry => "entry",
            Kind::Acks => "acks",
            Kind::BulletList => "bullet_list",
            Kind::EnumeratedList => "enumerated_list",
            Kind::ListItem => "list_item",
            Kind::DefinitionList => "definition_list",
            Kind::DefinitionListItem => "definition_list_item",
            Kind::Term { .. } => "term",
            Kind::Classifier => "classifier",
            Kind::Definition => "definition",
            Kind::FieldList => "field_list",
            Kind::Field => "field",
            Kind::FieldName { .. } => "field_name",
            Kind::FieldBody => "field_body",
            Kind::OptionList => "option_list",
            Kind::OptionListItem => "option_list_item",
            Kind::OptionGroup => "option_group",
            Kind::ProgramOption => "option",
            Kind::OptionString => "option_string",
            Kind::OptionArgument { .. } => "option_argument",
            Kind::Description => "description",
            Kind::LiteralBlock { .. } => "literal_block",
            Kind::DoctestBlock { .. } => "doctest_block",
            Kind::LineBlock => "line_block",
            Kind::Line => "line",
            Kind::BlockQuote => "block_quote",
            Kind::Image { .. } => "image",
            Kind::SystemMessage => "system_message",
        }
    }

    /// Elements whose children are inline text (docutils `TextElement`).
    ///
    /// Images inside these are laid out inline.
    pub fn is_text_element(&self) -> bool {
        matches!(
            self,
            Kind::Paragraph
                | Kind::Title
                | Kind::Rubric
                | Kind::Emphasis
                | Kind::Strong
                | Kind::LiteralEmphasis
                | Kind::TitleReference
                | Kind::Literal
                | Kind::Problematic
                | Kind::Reference { .. }
                | Kind::Target { .. }
                | Kind::FootnoteReference
                | Kind::Label
                | Kind::Centered
                | Kind::Production { .. }
                | Kind::DescSignature { .. }
                | Kind::DescType
                | Kind::DescName
                | Kind::DescClassname
                | Kind::DescParameterlist
                | Kind::VersionModified { .. }
                | Kind::Raw { .. }
                | Kind::Comment
                | Kind::SubstitutionDefinition
                | Kind::Term { .. }
                | Kind::Classifier
                | Kind::FieldName { .. }
                | Kind::OptionString
                | Kind::OptionArgument { .. }
                | Kind::LiteralBlock { .. }
                | Kind::DoctestBlock { .. }
                | Kind::Line
        )
    }

    /// Bullet and enumerated lists.
    pub fn is_list(&self) -> bool {
        matches!(self, Kind::BulletList | Kind::EnumeratedList)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_name_deserializes_with_defaults() {
        for name in KIND_NAMES {
            let json = format!(r#"{{"kind": "{name}"}}"#);
            let node: Node = serde_json::from_str(&json)
                .unwrap_or_else(|e| panic!("kind {name} failed to parse: {e}"));
            assert_eq!(node.kind.name(), *name);
            assert!(node.children.is_empty());
        }
    }

    #[test]
    fn test_kind_names_are_unique() {
        let mut names = KIND_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), KIND_NAMES.len());
    }

    #[test]
    fn test_attributes_from_json() {
        let node: Node = serde_json::from_str(
            r#"{"kind": "versionmodified", "type": "deprecated", "version": "2.6",
                "children": [{"kind": "text", "text": "Use foo."}]}"#,
        )
        .unwrap();
        assert_eq!(
            node.kind,
            Kind::VersionModified {
                change: "deprecated".into(),
                version: "2.6".into()
            }
        );
        assert_eq!(node.children, vec![Node::text("Use foo.")]);
    }

    #[test]
    fn test_index_entry_from_array() {
        let node: Node = serde_json::from_str(
            r#"{"kind": "index", "entries": [["pair", "built-in; len", "index-0"]]}"#,
        )
        .unwrap();
        let Kind::Index { entries } = node.kind else {
            panic!("expected index node");
        };
        assert_eq!(entries, vec![IndexEntry::new("pair", "built-in; len", "index-0")]);
    }

    #[test]
    fn test_index_entry_with_main_marker() {
        let node: Node = serde_json::from_str(
            r#"{"kind": "index", "entries": [
                ["single", "os", "index-0", ""],
                ["single", "sys", "index-1", null],
                ["single", "re", "index-2", "main"]
            ]}"#,
        )
        .unwrap();
        let Kind::Index { entries } = node.kind else {
            panic!("expected index node");
        };
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].main.as_deref(), Some(""));
        assert_eq!(entries[1].main, None);
        assert_eq!(entries[2].main.as_deref(), Some("main"));
        assert_eq!(entries[2].target_id, "index-2");
    }

    #[test]
    fn test_astext_separates_block_children() {
        let item = Node::new(Kind::ListItem).with_children([
            Node::new(Kind::Paragraph).with_child(Node::text("one")),
            Node::new(Kind::Paragraph)
                .with_children([Node::text("two "), Node::text("three")]),
        ]);
        assert_eq!(item.astext(), "one\n\ntwo three");
    }

    #[test]
    fn test_astext_concatenates_inline_children() {
        let para = Node::new(Kind::Paragraph).with_children([
            Node::text("a "),
            Node::new(Kind::Strong).with_child(Node::text("b")),
            Node::text(" c"),
        ]);
        assert_eq!(para.astext(), "a b c");
    }
}
