//! Index entry commands.

use crate::model::IndexEntry;

use super::escape::{Whitespace, escape_latex};
use super::warning::Warning;

/// Category commands for the fixed set of named index entry kinds.
const CATEGORY_COMMANDS: &[(&str, &str)] = &[
    ("module", "refmodindex"),
    ("keyword", "kwindex"),
    ("operator", "opindex"),
    ("object", "obindex"),
    ("exception", "exindex"),
    ("statement", "stindex"),
    ("builtin", "bifuncindex"),
];

fn category_command(kind: &str) -> Option<&'static str> {
    CATEGORY_COMMANDS
        .iter()
        .find(|(name, _)| *name == kind)
        .map(|(_, command)| *command)
}

/// Rewrite `;`-separated sub-entries (and the whitespace after each `;`)
/// to makeindex's `!` level separator.
fn hierarchical(text: &str) -> String {
    let mut parts = text.split(';');
    let mut result = parts.next().unwrap_or_default().to_string();
    for part in parts {
        result.push('!');
        result.push_str(part.trim_start());
    }
    result
}

/// Split `text` into exactly `count` escaped, trimmed components.
fn components(entry: &IndexEntry, count: usize, whitespace: Whitespace) -> Result<Vec<String>, Warning> {
    let parts: Vec<String> = entry
        .text
        .splitn(count, ';')
        .map(|part| escape_latex(part.trim(), whitespace))
        .collect();
    if parts.len() == count {
        Ok(parts)
    } else {
        Err(Warning::MalformedIndexEntry {
            kind: entry.kind.clone(),
            text: entry.text.clone(),
            expected: count,
        })
    }
}

/// Render one index entry, or explain why it is dropped.
pub fn index_command(entry: &IndexEntry, whitespace: Whitespace) -> Result<String, Warning> {
    match entry.kind.as_str() {
        "single" => Ok(format!(
            "\\index{{{}}}",
            hierarchical(&escape_latex(&entry.text, whitespace))
        )),
        "pair" => {
            let parts = components(entry, 2, whitespace)?;
            Ok(format!("\\indexii{{{}}}{{{}}}", parts[0], parts[1]))
        }
        "triple" => {
            let parts = components(entry, 3, whitespace)?;
            Ok(format!(
                "\\indexiii{{{}}}{{{}}}{{{}}}",
                parts[0], parts[1], parts[2]
            ))
        }
        kind => match category_command(kind) {
            Some(command) => Ok(format!(
                "\\{command}{{{}}}",
                escape_latex(&entry.text, whitespace)
            )),
            None => Err(Warning::UnknownIndexEntry {
                kind: kind.to_string(),
            }),
        },
    }
}
