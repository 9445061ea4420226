//! Literal block rendering.

use crate::highlight::{Highlighter, VERBATIM_END};

/// Ambient highlighting defaults, changed by `highlightlang` nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSettings {
    pub language: String,
    /// Blocks with at least this many lines get line numbers.
    pub lineno_threshold: usize,
}

impl HighlightSettings {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            lineno_threshold: usize::MAX,
        }
    }
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self::new("python")
    }
}

/// Number of visible lines in `code`.
pub fn line_count(code: &str) -> usize {
    memchr::memchr_iter(b'\n', code.as_bytes()).count() + 1
}

/// A captured literal block, ready to be highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralBlock<'a> {
    code: &'a str,
    language: &'a str,
    line_numbers: bool,
}

impl<'a> LiteralBlock<'a> {
    /// Resolve the block's language and line numbering.
    ///
    /// Block-level overrides win over the ambient settings.
    pub fn new(
        captured: &'a str,
        language: Option<&'a str>,
        linenos: Option<bool>,
        settings: &'a HighlightSettings,
    ) -> Self {
        let code = captured.trim_end_matches('\n');
        Self {
            code,
            language: language.unwrap_or(settings.language.as_str()),
            line_numbers: linenos
                .unwrap_or_else(|| line_count(code) >= settings.lineno_threshold),
        }
    }

    pub fn code(&self) -> &str {
        self.code
    }

    pub fn language(&self) -> &str {
        self.language
    }

    pub fn line_numbers(&self) -> bool {
        self.line_numbers
    }

    /// Highlight the block and give it a consistent trailer.
    pub fn render(&self, highlighter: &dyn Highlighter) -> String {
        let highlighted = highlighter
            .highlight_block(self.code, self.language, self.line_numbers)
            .replace('€', "@texteuro[]");
        let trimmed = highlighted.trim_end();
        let body = trimmed.strip_suffix(VERBATIM_END).unwrap_or(trimmed).trim_end();
        format!("\n{body}\n{VERBATIM_END}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::VerbatimHighlighter;

    #[test]
    fn test_line_count() {
        assert_eq!(line_count("a"), 1);
        assert_eq!(line_count("a\nb\nc"), 3);
    }

    #[test]
    fn test_trailing_newlines_are_trimmed() {
        let settings = HighlightSettings::default();
        let block = LiteralBlock::new("x = 1\n\n", None, None, &settings);
        assert_eq!(block.code(), "x = 1");
        assert_eq!(block.language(), "python");
        assert!(!block.line_numbers());
    }

    #[test]
    fn test_line_number_threshold_is_inclusive() {
        let mut settings = HighlightSettings::new("c");
        settings.lineno_threshold = 3;
        assert!(LiteralBlock::new("a\nb\nc", None, None, &settings).line_numbers());
        settings.lineno_threshold = 4;
        assert!(!LiteralBlock::new("a\nb\nc", None, None, &settings).line_numbers());
    }

    #[test]
    fn test_block_overrides() {
        let mut settings = HighlightSettings::default();
        settings.lineno_threshold = 1;
        let block = LiteralBlock::new("x", Some("rust"), Some(false), &settings);
        assert_eq!(block.language(), "rust");
        assert!(!block.line_numbers());
    }

    #[test]
    fn test_render_normalises_trailer() {
        let settings = HighlightSettings::default();
        let block = LiteralBlock::new("print('€')\n", None, None, &settings);
        let noisy = |code: &str, _: &str, _: bool| {
            format!("\\begin{{Verbatim}}\n{code}\n\n\\end{{Verbatim}}\n\n")
        };
        assert_eq!(
            block.render(&noisy),
            "\n\\begin{Verbatim}\nprint('@texteuro[]')\n\\end{Verbatim}\n"
        );
    }

    #[test]
    fn test_render_with_builtin_highlighter() {
        let settings = HighlightSettings::default();
        let block = LiteralBlock::new("pass", None, None, &settings);
        assert_eq!(
            block.render(&VerbatimHighlighter),
            "\n\\begin{Verbatim}[commandchars=@\\[\\]]\npass\n\\end{Verbatim}\n"
        );
    }
}
