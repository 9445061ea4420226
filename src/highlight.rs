//! Syntax highlighting collaborators.
//!
//! The translator does not colour code itself. Literal blocks are handed to
//! a [`Highlighter`], which returns a complete `Verbatim` environment; the
//! translator then normalises the environment's trailer.
//!
//! Highlighted blocks use `@`, `[` and `]` as fancyvrb command characters,
//! so those characters are written as `@PYGZat[]`, `@PYGZlb[]` and
//! `@PYGZrb[]` inside the block.

/// Closing line every highlighter output ends with.
pub const VERBATIM_END: &str = "\\end{Verbatim}";

/// Turns source code into a LaTeX `Verbatim` block.
pub trait Highlighter {
    /// Highlight `code` as `language`, with or without line numbers.
    ///
    /// The result must end with [`VERBATIM_END`] (trailing whitespace
    /// allowed).
    fn highlight_block(&self, code: &str, language: &str, line_numbers: bool) -> String;

    /// Preamble definitions the highlighted blocks rely on.
    fn stylesheet(&self) -> String {
        String::new()
    }
}

impl<F> Highlighter for F
where
    F: Fn(&str, &str, bool) -> String,
{
    fn highlight_block(&self, code: &str, language: &str, line_numbers: bool) -> String {
        self(code, language, line_numbers)
    }
}

/// Highlighter that emits code uncoloured, in any language.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimHighlighter;

impl VerbatimHighlighter {
    fn escape(code: &str) -> String {
        let mut result = String::with_capacity(code.len());
        for c in code.chars() {
            match c {
                '@' => result.push_str("@PYGZat[]"),
                '[' => result.push_str("@PYGZlb[]"),
                ']' => result.push_str("@PYGZrb[]"),
                _ => result.push(c),
            }
        }
        result
    }
}

impl Highlighter for VerbatimHighlighter {
    fn highlight_block(&self, code: &str, _language: &str, line_numbers: bool) -> String {
        let numbers = if line_numbers { ",numbers=left" } else { "" };
        format!(
            "\\begin{{Verbatim}}[commandchars=@\\[\\]{numbers}]\n{}\n{VERBATIM_END}\n",
            Self::escape(code)
        )
    }

    fn stylesheet(&self) -> String {
        concat!(
            "\\usepackage{fancyvrb}\n",
            "\\def\\PYGZat{@}\n",
            "\\def\\PYGZlb{[}\n",
            "\\def\\PYGZrb{]}\n",
        )
        .to_string()
    }
}
