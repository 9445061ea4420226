//! Pure LaTeX escaping utilities.
//!
//! Text runs are escaped in a single pass over the input, so the output of
//! one replacement is never fed to another. In particular a backslash turns
//! into `\textbackslash{}` and the braces it introduces are not escaped
//! again.

/// How whitespace in escaped text is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Whitespace {
    /// LaTeX collapses runs of spaces and reflows lines.
    #[default]
    Collapse,
    /// Every space and line break is significant (line blocks).
    Literal,
}

/// Replacement for a reserved character, if it has one.
fn replacement(c: char) -> Option<&'static str> {
    let escaped = match c {
        '\\' => r"\textbackslash{}",
        '$' => r"\$",
        '%' => r"\%",
        '&' => r"\&",
        '#' => r"\#",
        '_' => r"\_",
        '{' => r"\{",
        '}' => r"\}",
        '[' => "{[}",
        ']' => "{]}",
        '¶' => r"\P{}",
        '§' => r"\S{}",
        '∞' => r"$\infinity$",
        '±' => r"$\pm$",
        '‣' => r"$\rightarrow$",
        // GREEK CAPITAL LETTER OMEGA and OHM SIGN
        'Ω' | 'Ω' => r"$\Omega$",
        '~' => r"\textasciitilde{}",
        '€' => r"\texteuro{}",
        '<' => r"\textless{}",
        '>' => r"\textgreater{}",
        '^' => r"\textasciicircum{}",
        _ => return None,
    };
    Some(escaped)
}

/// Whether `c` has a fixed replacement in normal mode.
pub fn is_reserved(c: char) -> bool {
    replacement(c).is_some()
}

/// Escape text for inclusion in a LaTeX body.
///
/// In [`Whitespace::Literal`] mode each newline additionally becomes a
/// forced line break (`~\\`) and each space a non-breaking space (`~`).
///
/// # Examples
///
/// ```
/// use doctex::latex::{Whitespace, escape_latex};
///
/// assert_eq!(escape_latex("100% & $5", Whitespace::Collapse), r"100\% \& \$5");
/// assert_eq!(escape_latex("a b", Whitespace::Literal), "a~b");
/// ```
pub fn escape_latex(text: &str, whitespace: Whitespace) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);

    for c in text.chars() {
        if let Some(escaped) = replacement(c) {
            result.push_str(escaped);
            continue;
        }
        match (whitespace, c) {
            // A blank before the break avoids "There's no line here to end".
            (Whitespace::Literal, '\n') => result.push_str("~\\\\\n"),
            (Whitespace::Literal, ' ') => result.push('~'),
            _ => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn escape(text: &str) -> String {
        escape_latex(text, Whitespace::Collapse)
    }

    #[test]
    fn test_escape_specials() {
        assert_eq!(escape("100% & $5 {x}"), r"100\% \& \$5 \{x\}");
        assert_eq!(escape("a_b#c"), r"a\_b\#c");
    }

    #[test]
    fn test_escape_backslash_once() {
        assert_eq!(escape(r"C:\path"), r"C:\textbackslash{}path");
        assert_eq!(escape(r"\{"), r"\textbackslash{}\{");
    }

    #[test]
    fn test_escape_brackets() {
        assert_eq!(escape("[opt]"), "{[}opt{]}");
    }

    #[test]
    fn test_escape_text_symbols() {
        assert_eq!(escape("~^<>"), r"\textasciitilde{}\textasciicircum{}\textless{}\textgreater{}");
        assert_eq!(escape("5€"), r"5\texteuro{}");
        assert_eq!(escape("¶§"), r"\P{}\S{}");
    }

    #[test]
    fn test_escape_math_symbols() {
        assert_eq!(escape("±∞"), r"$\pm$$\infinity$");
        assert_eq!(escape("‣"), r"$\rightarrow$");
        assert_eq!(escape("\u{2126}\u{03a9}"), r"$\Omega$$\Omega$");
    }

    #[test]
    fn test_literal_whitespace() {
        assert_eq!(
            escape_latex("two  spaces\nnext", Whitespace::Literal),
            "two~~spaces~\\\\\nnext"
        );
    }

    #[test]
    fn test_literal_whitespace_after_substitution() {
        assert_eq!(escape_latex("50 %", Whitespace::Literal), r"50~\%");
    }

    #[test]
    fn test_collapse_keeps_whitespace() {
        assert_eq!(escape("a  b\nc"), "a  b\nc");
    }

    proptest! {
        #[test]
        fn prop_unreserved_text_is_unchanged(s in "[a-zA-Z0-9 .,:;!?()'\"@*+=/|\n-]*") {
            prop_assert_eq!(escape(&s), s);
        }

        #[test]
        fn prop_only_reserved_characters_change(s in ".*") {
            let plain: String = s.chars().filter(|&c| !is_reserved(c)).collect();
            prop_assert_eq!(escape(&plain), plain);
            for c in s.chars().filter(|&c| is_reserved(c)) {
                prop_assert_ne!(escape(&c.to_string()), c.to_string());
            }
        }

        #[test]
        fn prop_escaping_is_per_character(a in ".*", b in ".*") {
            let joined = format!("{a}{b}");
            prop_assert_eq!(escape(&joined), format!("{}{}", escape(&a), escape(&b)));
        }

        #[test]
        fn prop_no_bare_reserved_characters(s in ".*") {
            let escaped = escape(&s);
            for c in ['%', '&', '#', '_'] {
                let bare = escaped
                    .match_indices(c)
                    .any(|(i, _)| !escaped[..i].ends_with('\\'));
                prop_assert!(!bare, "bare {c:?} in {escaped:?}");
            }
        }
    }
}
