//! Document tree → LaTeX body translation.
//!
//! This module holds the walker. It makes a single depth-first pass over
//! the tree: every node is entered, its children are visited in order
//! unless the enter step declared it terminal, then its exit step runs and
//! the closer returned by the enter step is appended. No I/O is performed
//! here; the export layer assembles the final document.

use crate::highlight::{Highlighter, VerbatimHighlighter};
use crate::model::{Kind, Node};
use crate::resources::{IdentityResolver, ResourceResolver};

use super::context::{Closer, Step};
use super::desc::{DescEntry, SignaturePart};
use super::escape::{Whitespace, escape_latex};
use super::image::{ImageOptions, render_image};
use super::index::index_command;
use super::refs::{ReferenceWrap, TargetWrap, WrittenIds, reference_wrap};
use super::sectioning::{SectionTracker, TitlePlacement};
use super::table::{Columns, TableState, header_cell};
use super::verbatim::{HighlightSettings, LiteralBlock};
use super::warning::Warning;

/// Settings that influence the translated body.
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Document class; `manual` starts sections at chapters.
    pub docclass: String,
    /// Preconfigured document title. When set, the first title node is
    /// still dropped from the body but not captured.
    pub title: Option<String>,
    /// Highlighting defaults until a `highlightlang` node changes them.
    pub highlight: HighlightSettings,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            docclass: "manual".to_string(),
            title: None,
            highlight: HighlightSettings::default(),
        }
    }
}

/// Result of translating a tree.
#[derive(Debug, Clone, Default)]
pub struct Translation {
    /// The LaTeX body.
    pub body: String,
    /// Text of the first title node, unless a title was preconfigured.
    pub title: Option<String>,
    /// Whether the body uses `\includegraphics`.
    pub needs_graphics: bool,
    /// Whether the body contains index commands.
    ///
    /// Informational only: the document template always prints the index,
    /// so callers that post-process the output can decide to skip
    /// `makeindex` when this is `false`.
    pub has_index: bool,
    /// Recoverable problems met along the way.
    pub warnings: Vec<Warning>,
}

/// Translation state for one tree (pure string accumulation, no I/O).
pub struct Translator<'a> {
    options: &'a TranslateOptions,
    highlighter: &'a dyn Highlighter,
    resolver: &'a dyn ResourceResolver,
    // Accumulated output
    out: String,
    warnings: Vec<Warning>,
    title: Option<String>,
    needs_graphics: bool,
    has_index: bool,
    // Traversal state
    written: WrittenIds,
    highlight: HighlightSettings,
    sections: SectionTracker,
    verbatim: Option<String>,
    literal_whitespace: usize,
    in_title: bool,
    in_production_list: bool,
    descs: Vec<DescEntry>,
    tables: Vec<TableState>,
    option_groups: Vec<usize>,
}

impl<'a> Translator<'a> {
    /// Create a translator with the built-in highlighter and resolver.
    pub fn new(options: &'a TranslateOptions) -> Self {
        Self {
            options,
            highlighter: &VerbatimHighlighter,
            resolver: &IdentityResolver,
            out: String::new(),
            warnings: Vec::new(),
            title: None,
            needs_graphics: false,
            has_index: false,
            written: WrittenIds::new(),
            highlight: options.highlight.clone(),
            sections: SectionTracker::new(&options.docclass),
            verbatim: None,
            literal_whitespace: 0,
            in_title: false,
            in_production_list: false,
            descs: Vec::new(),
            tables: Vec::new(),
            option_groups: Vec::new(),
        }
    }

    pub fn with_highlighter(mut self, highlighter: &'a dyn Highlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    pub fn with_resolver(mut self, resolver: &'a dyn ResourceResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Translate the tree, consuming the translator.
    pub fn translate(mut self, root: &Node) -> Translation {
        self.walk(root, None);
        log::debug!(
            "translated {} bytes of LaTeX, {} anchors, {} warnings",
            self.out.len(),
            self.written.len(),
            self.warnings.len()
        );

        Translation {
            body: self.out,
            title: self.title,
            needs_graphics: self.needs_graphics,
            has_index: self.has_index,
            warnings: self.warnings,
        }
    }

    fn walk(&mut self, node: &Node, parent: Option<&Kind>) {
        match self.enter(node, parent) {
            Step::Skip => {}
            Step::Descend(closer) => {
                for child in &node.children {
                    self.walk(child, Some(&node.kind));
                }
                self.exit(node);
                self.out.push_str(closer.as_str());
            }
        }
    }

    fn warn(&mut self, warning: Warning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    fn whitespace(&self) -> Whitespace {
        if self.literal_whitespace > 0 {
            Whitespace::Literal
        } else {
            Whitespace::Collapse
        }
    }

    fn escape(&self, text: &str) -> String {
        escape_latex(text, self.whitespace())
    }

    fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Enter step: emit opening markup, update state, and decide whether
    /// the children are visited.
    fn enter(&mut self, node: &Node, parent: Option<&Kind>) -> Step {
        match &node.kind {
            Kind::Text { text } => {
                match &mut self.verbatim {
                    Some(captured) => captured.push_str(text),
                    None => {
                        let escaped = self.escape(text);
                        self.push(&escaped);
                    }
                }
                Step::Skip
            }

            Kind::Document => {
                if let Some(marker) = self.sections.enter_document() {
                    self.push(marker);
                }
                Step::descend()
            }

            Kind::Section { ids } => {
                self.sections.enter_section();
                self.push("\n\n");
                for id in ids {
                    if let Some(anchor) = self.written.anchor(id) {
                        self.push(&anchor);
                    }
                }
                Step::descend()
            }

            Kind::Title => self.enter_title(node, parent),

            Kind::Paragraph => {
                self.push("\n");
                Step::close_with("\n")
            }

            Kind::HighlightLang {
                lang,
                linenothreshold,
            } => {
                self.highlight = HighlightSettings {
                    language: lang.clone(),
                    lineno_threshold: linenothreshold.unwrap_or(usize::MAX),
                };
                Step::Skip
            }

            Kind::Comment | Kind::SubstitutionDefinition | Kind::Label => Step::Skip,

            Kind::Glossary
            | Kind::PendingXref
            | Kind::Colspec
            | Kind::TableHead
            | Kind::TableBody
            | Kind::DefinitionListItem
            | Kind::Field
            | Kind::DescContent
            | Kind::Line
            | Kind::OptionListItem
            | Kind::OptionString => Step::descend(),

            // Inline markup
            Kind::Emphasis | Kind::TitleReference => {
                self.push("\\emph{");
                Step::close_with("}")
            }
            Kind::Strong => {
                self.push("\\textbf{");
                Step::close_with("}")
            }
            Kind::LiteralEmphasis => {
                self.push("\\emph{\\texttt{");
                Step::close_with("}}")
            }
            Kind::Literal => {
                let content = self.escape(node.astext().trim());
                let command = if self.in_title {
                    "texttt"
                } else if content.contains([' ', '\t', '\n']) {
                    "samp"
                } else {
                    "code"
                };
                self.push(&format!("\\{command}{{{content}}}"));
                Step::Skip
            }
            Kind::Problematic => {
                self.push("{\\color{red}\\bfseries{}");
                Step::close_with("}")
            }
            Kind::FootnoteReference => {
                self.push(&format!("\\footnotemark[{}]", node.astext()));
                Step::Skip
            }

            Kind::Reference { refuri } => {
                let wrap = reference_wrap(
                    refuri.as_deref(),
                    self.in_title,
                    self.in_production_list,
                    self.whitespace(),
                );
                match wrap {
                    ReferenceWrap::Bare => Step::descend(),
                    ReferenceWrap::Command(open) => {
                        self.push(&open);
                        Step::close_with("}")
                    }
                    ReferenceWrap::Malformed(uri) => {
                        self.warn(Warning::MalformedReference { uri });
                        Step::descend()
                    }
                }
            }

            Kind::Target {
                ids,
                refuri,
                refid,
                refname,
            } => {
                let mut wrap = TargetWrap::default();
                if refuri.is_none() && refid.is_none() && refname.is_none() {
                    for id in ids {
                        wrap.add(&mut self.written, id);
                    }
                } else if let Some(refid) = refid {
                    wrap.add(&mut self.written, refid);
                }
                self.push(&wrap.open);
                Step::Descend(Closer::owned(wrap.close))
            }

            Kind::Index { entries } => {
                let whitespace = self.whitespace();
                for entry in entries {
                    match index_command(entry, whitespace) {
                        Ok(command) => {
                            self.has_index = true;
                            self.push(&command);
                        }
                        Err(warning) => self.warn(warning),
                    }
                }
                Step::Skip
            }

            Kind::Raw { format } => {
                if format.split_whitespace().any(|f| f == "latex") {
                    self.push(&node.astext());
                }
                Step::Skip
            }

            // Footnotes and asides
            Kind::Footnote => {
                let number = node.children.first().map(Node::astext).unwrap_or_default();
                self.push(&format!("\\footnotetext[{}]{{", number.trim()));
                Step::close_with("}")
            }
            Kind::Rubric => {
                let is_footnotes =
                    node.children.len() == 1 && node.children[0].astext() == "Footnotes";
                if !is_footnotes {
                    self.warn(Warning::DroppedRubric);
                }
                Step::Skip
            }
            Kind::Topic | Kind::Sidebar => {
                self.push("\\setbox0\\vbox{\n\\begin{minipage}{0.95\\textwidth}\n");
                Step::close_with(
                    "\\end{minipage}}\n\\begin{center}\\setlength{\\fboxsep}{5pt}\\shadowbox{\\box0}\\end{center}\n",
                )
            }
            Kind::Seealso => {
                self.push("\n\n\\begin{seealso}\n");
                Step::close_with("\n\\end{seealso}\n")
            }
            Kind::Note => {
                self.push("\n\\begin{notice}[note]");
                Step::close_with("\\end{notice}\n")
            }
            Kind::Warning => {
                self.push("\n\\begin{notice}[warning]");
                Step::close_with("\\end{notice}\n")
            }
            Kind::Centered => {
                self.push("\n\\begin{centering}");
                Step::close_with("\n\\end{centering}")
            }
            Kind::Transition => {
                self.push("\n\n\\bigskip\\hrule{}\\bigskip\n\n");
                Step::descend()
            }

            // Grammar productions
            Kind::ProductionList => {
                self.push("\n\n\\begin{productionlist}\n");
                self.in_production_list = true;
                Step::close_with("\\end{productionlist}\n\n")
            }
            Kind::Production { tokenname } => {
                if tokenname.is_empty() {
                    self.push("\\productioncont{");
                } else {
                    let token = self.escape(tokenname);
                    self.push(&format!("\\production{{{token}}}{{"));
                }
                Step::close_with("}\n")
            }

            // Object descriptions
            Kind::Desc { desctype, noindex } => {
                self.descs.push(DescEntry::new(desctype, *noindex));
                Step::descend()
            }
            Kind::DescSignature { .. } => Step::descend(),
            Kind::DescType => self.record_signature_part(node, SignaturePart::Type),
            Kind::DescName => self.record_signature_part(node, SignaturePart::Name),
            Kind::DescClassname => self.record_signature_part(node, SignaturePart::ClassName),
            Kind::DescParameterlist => {
                self.record_signature_part(node, SignaturePart::Parameters)
            }
            Kind::Refcount => {
                self.push("\\emph{");
                Step::close_with("}\\\\")
            }
            Kind::VersionModified { change, version } => {
                self.push(&format!("\\{change}"));
                if change == "deprecated" {
                    self.push(&format!("{{{version}}}{{"));
                    Step::close_with("}")
                } else if node.children.is_empty() {
                    self.push(&format!("{{{version}}}"));
                    Step::descend()
                } else {
                    self.push("[");
                    Step::Descend(Closer::owned(format!("]{{{version}}}")))
                }
            }
            Kind::Module {
                modname,
                synopsis,
                platform,
            } => {
                let key = modname.replace('_', "");
                let mut out = format!(
                    "\\declaremodule[{key}]{{}}{{{}}}\\modulesynopsis{{{}}}",
                    self.escape(modname),
                    self.escape(synopsis)
                );
                if let Some(platform) = platform {
                    out.push_str(&format!("\\platform{{{}}}", self.escape(platform)));
                }
                self.push(&out);
                Step::descend()
            }

            // Tables
            Kind::Table => {
                let columns = node.children.iter().find_map(|child| match child.kind {
                    Kind::TableGroup { cols } => Some(cols),
                    _ => None,
                });
                let columns = columns.unwrap_or(0);
                if Columns::from_count(columns).is_some() {
                    Step::descend()
                } else {
                    self.warn(Warning::TableColumns { columns });
                    Step::Skip
                }
            }
            Kind::TableGroup { cols } => match Columns::from_count(*cols) {
                Some(columns) => {
                    self.push(&columns.begin());
                    self.tables.push(TableState::new(columns));
                    Step::descend()
                }
                None => {
                    self.warn(Warning::TableColumns { columns: *cols });
                    Step::Skip
                }
            },
            Kind::Row => {
                if let Some(start) = self.tables.last().and_then(TableState::row_start) {
                    self.push(&start);
                }
                Step::descend()
            }
            Kind::Entry => match self.tables.last() {
                Some(table) if table.in_header() => {
                    let cell = header_cell(node, self.whitespace());
                    self.push(&cell);
                    Step::Skip
                }
                Some(_) => {
                    self.push("{");
                    Step::close_with("}")
                }
                None => Step::descend(),
            },

            // Lists
            Kind::Acks => {
                let names: Vec<String> = node
                    .children
                    .first()
                    .map(|list| list.children.iter().map(Node::astext).collect())
                    .unwrap_or_default();
                let names = self.escape(&names.join(", "));
                self.push(&format!("\n\n{names}.\n\n"));
                Step::Skip
            }
            Kind::BulletList => {
                self.push("\\begin{itemize}\n");
                Step::close_with("\\end{itemize}\n")
            }
            Kind::EnumeratedList => {
                self.push("\\begin{enumerate}\n");
                Step::close_with("\\end{enumerate}\n")
            }
            Kind::ListItem => {
                // "{}" keeps a leading "[" in the item text from being
                // read as the optional label argument.
                self.push("\\item {} ");
                Step::close_with("\n")
            }
            Kind::DefinitionList => {
                self.push("\\begin{description}\n");
                Step::close_with("\\end{description}\n")
            }
            Kind::Term { ids } | Kind::FieldName { ids } => {
                let mut closer = String::from("]");
                if let Some(anchor) = ids.first().and_then(|id| self.written.anchor(id)) {
                    closer.push_str(&anchor);
                }
                self.push("\\item[");
                Step::Descend(Closer::owned(closer))
            }
            Kind::Classifier => {
                self.push("{[}");
                Step::close_with("{]}")
            }
            Kind::Definition | Kind::FieldBody => Step::close_with("\n"),
            Kind::FieldList => {
                self.push("\\begin{quote}\\begin{description}\n");
                Step::close_with("\\end{description}\\end{quote}\n")
            }
            Kind::OptionList => {
                self.push("% [option list]\n\\begin{optionlist}{3cm}\n");
                Step::close_with("\\end{optionlist}\n")
            }
            Kind::OptionGroup => {
                self.push("\\item [");
                self.option_groups.push(0);
                Step::close_with("] ")
            }
            Kind::ProgramOption => {
                if self.option_groups.last().is_some_and(|&seen| seen > 0) {
                    self.push(", ");
                }
                Step::descend()
            }
            Kind::OptionArgument { delimiter } => {
                self.push(delimiter.as_deref().unwrap_or(" "));
                Step::descend()
            }
            Kind::Description => {
                self.push(" ");
                Step::descend()
            }

            // Literal content
            Kind::LiteralBlock { .. } | Kind::DoctestBlock { .. } => {
                self.verbatim = Some(String::new());
                Step::descend()
            }
            Kind::LineBlock => {
                self.push("\\begin{flushleft}\n");
                self.literal_whitespace += 1;
                Step::close_with("\n\\end{flushleft}\n")
            }
            Kind::BlockQuote => {
                let wraps_list = node.children.len() == 1 && node.children[0].kind.is_list();
                if wraps_list {
                    Step::descend()
                } else {
                    self.push("\\begin{quote}\n");
                    Step::close_with("\\end{quote}\n")
                }
            }
            Kind::Image {
                uri,
                scale,
                width,
                align,
            } => {
                self.needs_graphics = true;
                let options = ImageOptions {
                    scale: *scale,
                    width: width.as_deref(),
                    align: align.as_deref(),
                    inline: parent.is_some_and(Kind::is_text_element),
                };
                let path = self.resolver.resolve(uri);
                self.push(&render_image(&path, &options));
                Step::Skip
            }
            Kind::SystemMessage => Step::close_with("\n"),
        }
    }

    /// Exit step: state changes and output that depend on the visited
    /// children.
    fn exit(&mut self, node: &Node) {
        match &node.kind {
            Kind::Section { .. } => self.sections.leave_section(),
            Kind::Title => self.in_title = false,
            Kind::ProductionList => self.in_production_list = false,
            Kind::Desc { .. } => {
                if let Some(desc) = self.descs.pop() {
                    self.out.push_str(&desc.end());
                }
            }
            Kind::DescSignature { ids } => {
                let Some(desc) = self.descs.last_mut() else {
                    return;
                };
                let anchor = if desc.wants_anchor() {
                    ids.first().and_then(|id| self.written.anchor(id))
                } else {
                    None
                };
                let signature = desc.finish_signature(anchor.as_deref().unwrap_or(""));
                self.out.push_str(&signature);
            }
            Kind::TableGroup { .. } => {
                if let Some(table) = self.tables.pop() {
                    self.out.push_str(&table.columns.end());
                }
            }
            Kind::Row => {
                if let Some(table) = self.tables.last_mut() {
                    table.finish_row();
                }
            }
            Kind::OptionGroup => {
                self.option_groups.pop();
            }
            Kind::ProgramOption => {
                if let Some(seen) = self.option_groups.last_mut() {
                    *seen += 1;
                }
            }
            Kind::LineBlock => self.literal_whitespace = self.literal_whitespace.saturating_sub(1),
            Kind::LiteralBlock { language, linenos }
            | Kind::DoctestBlock { language, linenos } => {
                let captured = self.verbatim.take().unwrap_or_default();
                let block =
                    LiteralBlock::new(&captured, language.as_deref(), *linenos, &self.highlight);
                let rendered = block.render(self.highlighter);
                self.out.push_str(&rendered);
            }
            _ => {}
        }
    }

    fn enter_title(&mut self, node: &Node, parent: Option<&Kind>) -> Step {
        let placement = TitlePlacement::for_parent(parent);
        if placement == TitlePlacement::Suppressed {
            return Step::Skip;
        }

        if self.sections.take_title() {
            if !(node.children.len() == 1 && node.children[0].is_text()) {
                self.warn(Warning::ComplexTitle);
            }
            let preconfigured = self.options.title.as_deref().is_some_and(|t| !t.is_empty());
            if !preconfigured {
                self.title = Some(node.astext());
            }
            return Step::Skip;
        }

        let closer = match placement {
            TitlePlacement::Section => {
                let command = self.sections.heading();
                self.push(&format!("\\{command}{{"));
                Closer::new("}\n")
            }
            TitlePlacement::Aside => {
                self.push("\\textbf{");
                Closer::new("}\n\n\\medskip\n\n")
            }
            TitlePlacement::Other | TitlePlacement::Suppressed => {
                self.warn(Warning::MisplacedTitle);
                self.push("\\textbf{");
                Closer::new("}")
            }
        };
        self.in_title = true;
        Step::Descend(closer)
    }

    /// Store a signature part on the open description; the part's own
    /// children are not rendered.
    fn record_signature_part(&mut self, node: &Node, part: SignaturePart) -> Step {
        let text = self.escape(node.astext().trim());
        if let Some(desc) = self.descs.last_mut() {
            desc.record(part, text);
        }
        Step::Skip
    }
}

/// Translate a tree with the built-in collaborators.
///
/// This is the main entry point for body translation. Use [`Translator`]
/// directly to plug in a different highlighter or resource resolver.
pub fn translate(root: &Node, options: &TranslateOptions) -> Translation {
    Translator::new(options).translate(root)
}
