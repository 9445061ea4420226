//! Complete LaTeX documents.
//!
//! [`LatexExporter`] wraps a translated body in the document template:
//! class and packages, title block, optional module index, the
//! highlighter's stylesheet and, when images are used, `graphicx`.

use std::io::Write;

use serde::Deserialize;

use crate::error::Result;
use crate::highlight::{Highlighter, VerbatimHighlighter};
use crate::latex::{
    HighlightSettings, TranslateOptions, Translation, Translator, Warning, Whitespace,
    escape_latex,
};
use crate::model::Node;
use crate::resources::{IdentityResolver, ResourceResolver};

use super::Exporter;

const FOOTER: &str = "\n\\printindex\n\\end{document}\n";

const GRAPHICX: &str = "
% Check if we are compiling under latex or pdflatex.
\\ifx\\pdftexversion\\undefined
  \\usepackage{graphicx}
\\else
  \\usepackage[pdftex]{graphicx}
\\fi
";

/// Configuration for LaTeX export.
///
/// Deserializable so a settings file can be layered under command-line
/// flags; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LatexConfig {
    /// `manual` or `howto`; `manual` starts sections at chapters.
    pub docclass: String,
    /// Paper name without the `paper` suffix, e.g. `a4`.
    pub paper_size: String,
    pub point_size: String,
    /// Document title. When empty the first title in the tree is used.
    pub title: String,
    pub author: String,
    pub date: String,
    pub release: String,
    /// Raw LaTeX inserted before `\makeindex`.
    pub preamble: String,
    /// Emit `\makemodindex`/`\printmodindex`.
    pub modindex: bool,
    /// Language for literal blocks until the tree says otherwise.
    pub highlight_language: String,
}

impl Default for LatexConfig {
    fn default() -> Self {
        Self {
            docclass: "manual".to_string(),
            paper_size: "letter".to_string(),
            point_size: "10pt".to_string(),
            title: String::new(),
            author: String::new(),
            date: "\\today".to_string(),
            release: String::new(),
            preamble: String::new(),
            modindex: true,
            highlight_language: "python".to_string(),
        }
    }
}

impl LatexConfig {
    pub fn with_docclass(mut self, docclass: impl Into<String>) -> Self {
        self.docclass = docclass.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_release(mut self, release: impl Into<String>) -> Self {
        self.release = release.into();
        self
    }

    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = preamble.into();
        self
    }

    pub fn with_modindex(mut self, modindex: bool) -> Self {
        self.modindex = modindex;
        self
    }

    /// Class option for the paper size; an empty size means letter.
    pub fn paper_option(&self) -> String {
        if self.paper_size.is_empty() {
            "letterpaper".to_string()
        } else {
            format!("{}paper", self.paper_size)
        }
    }

    /// Options for the body translator.
    pub fn translate_options(&self) -> TranslateOptions {
        TranslateOptions {
            docclass: self.docclass.clone(),
            title: (!self.title.is_empty()).then(|| self.title.clone()),
            highlight: HighlightSettings::new(self.highlight_language.as_str()),
        }
    }

    /// Document preamble up to and including `\makeindex`.
    fn header(&self, title: &str) -> String {
        format!(
            "% Generated by doctex.\n\
             \\documentclass[{paper},{points}]{{{class}}}\n\
             \\usepackage[utf8]{{inputenc}}\n\
             \\usepackage[T1]{{fontenc}}\n\
             \\usepackage[colorlinks,breaklinks]{{hyperref}}\n\
             \\usepackage{{tabularx}}\n\
             \\title{{{title}}}\n\
             \\date{{{date}}}\n\
             \\release{{{release}}}\n\
             \\author{{{author}}}\n\
             {preamble}\n\
             \\makeindex\n",
            paper = self.paper_option(),
            points = self.point_size,
            class = self.docclass,
            date = self.date,
            release = self.release,
            author = self.author,
            preamble = self.preamble,
        )
    }
}

/// Exporter for LaTeX output.
pub struct LatexExporter<'a> {
    config: LatexConfig,
    highlighter: &'a dyn Highlighter,
    resolver: &'a dyn ResourceResolver,
}

impl Default for LatexExporter<'_> {
    fn default() -> Self {
        Self::with_config(LatexConfig::default())
    }
}

impl<'a> LatexExporter<'a> {
    /// Create a new LatexExporter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a LatexExporter with the specified configuration.
    pub fn with_config(config: LatexConfig) -> Self {
        Self {
            config,
            highlighter: &VerbatimHighlighter,
            resolver: &IdentityResolver,
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

    pub fn config(&self) -> &LatexConfig {
        &self.config
    }

    /// Translate the tree and assemble the full document text.
    ///
    /// `\makeindex` and `\printindex` are always emitted; an empty index
    /// prints nothing. [`Translation::has_index`] is left to the caller.
    pub fn render(&self, root: &Node) -> (String, Vec<Warning>) {
        let options = self.config.translate_options();
        let translation = Translator::new(&options)
            .with_highlighter(self.highlighter)
            .with_resolver(self.resolver)
            .translate(root);
        let document = self.assemble(&translation);
        (document, translation.warnings)
    }

    fn assemble(&self, translation: &Translation) -> String {
        let title = if self.config.title.is_empty() {
            translation
                .title
                .as_deref()
                .map(|title| escape_latex(title, Whitespace::Collapse))
                .unwrap_or_default()
        } else {
            self.config.title.clone()
        };

        let mut out = self.config.header(&title);
        if self.config.modindex {
            out.push_str("\\makemodindex\n");
        }
        out.push_str(&self.highlighter.stylesheet());
        if translation.needs_graphics {
            out.push_str(GRAPHICX);
        }
        out.push_str("\n\n");
        out.push_str(&translation.body);
        if self.config.modindex {
            out.push_str("\\printmodindex\n");
        }
        out.push_str(FOOTER);
        out
    }
}

impl Exporter for LatexExporter<'_> {
    fn export<W: Write>(&self, root: &Node, writer: &mut W) -> Result<Vec<Warning>> {
        let (document, warnings) = self.render(root);
        writer.write_all(document.as_bytes())?;
        Ok(warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Kind;

    fn sample() -> Node {
        Node::new(Kind::Document).with_child(
            Node::new(Kind::Section { ids: vec![] })
                .with_child(Node::new(Kind::Title).with_child(Node::text("Tips & Tricks")))
                .with_child(Node::new(Kind::Paragraph).with_child(Node::text("Body."))),
        )
    }

    #[test]
    fn test_paper_option() {
        let mut config = LatexConfig::default();
        assert_eq!(config.paper_option(), "letterpaper");
        config.paper_size = "a4".to_string();
        assert_eq!(config.paper_option(), "a4paper");
        config.paper_size.clear();
        assert_eq!(config.paper_option(), "letterpaper");
    }

    #[test]
    fn test_captured_title_is_escaped() {
        let (doc, warnings) = LatexExporter::new().render(&sample());
        assert!(warnings.is_empty());
        assert!(doc.starts_with("% Generated by doctex.\n\\documentclass[letterpaper,10pt]{manual}\n"));
        assert!(doc.contains("\\title{Tips \\& Tricks}\n"));
        assert!(doc.contains("\\makeindex\n\\makemodindex\n"));
        assert!(doc.contains("\\begin{document}\n\\maketitle\n\\tableofcontents\n"));
        assert!(doc.ends_with("\nBody.\n\\printmodindex\n\n\\printindex\n\\end{document}\n"));
        assert!(!doc.contains("graphicx"));
    }

    #[test]
    fn test_configured_title_and_no_modindex() {
        let config = LatexConfig::default()
            .with_title("Reference")
            .with_author("A. Writer")
            .with_modindex(false);
        let (doc, _) = LatexExporter::with_config(config).render(&sample());
        assert!(doc.contains("\\title{Reference}\n"));
        assert!(doc.contains("\\author{A. Writer}\n"));
        assert!(!doc.contains("modindex"));
        assert!(!doc.contains("Tips"));
    }

    #[test]
    fn test_graphicx_only_when_needed() {
        let root = Node::new(Kind::Document).with_child(Node::new(Kind::Image {
            uri: "a.png".to_string(),
            scale: None,
            width: None,
            align: None,
        }));
        let (doc, _) = LatexExporter::new().render(&root);
        assert!(doc.contains("\\usepackage[pdftex]{graphicx}"));
    }

    #[test]
    fn test_index_is_printed_without_entries() {
        let config = LatexConfig::default().with_modindex(false);
        let (doc, _) = LatexExporter::with_config(config).render(&sample());
        assert!(doc.contains("\\makeindex\n"));
        assert!(doc.ends_with("\n\\printindex\n\\end{document}\n"));
    }

    #[test]
    fn test_config_from_json() {
        let config: LatexConfig =
            serde_json::from_str(r#"{"docclass": "howto", "paper_size": "a4"}"#).unwrap();
        assert_eq!(config.docclass, "howto");
        assert_eq!(config.paper_option(), "a4paper");
        assert_eq!(config.point_size, "10pt");
        assert!(config.modindex);
    }

    #[test]
    fn test_export_writes_and_returns_warnings() {
        let root = Node::new(Kind::Document)
            .with_child(Node::new(Kind::Rubric).with_child(Node::text("Other")));
        let mut out = Vec::new();
        let warnings = LatexExporter::new().export(&root, &mut out).unwrap();
        assert_eq!(warnings, vec![Warning::DroppedRubric]);
        assert!(String::from_utf8(out).unwrap().ends_with("\\end{document}\n"));
    }
}
