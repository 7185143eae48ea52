//! Dictionary file parser.
//!
//! # Format
//! ```text
//! cat	kot
//! dog	hund
//!
//! house	dom
//! ```
//!
//! One entry per line, term and translation separated by a single delimiter
//! (tab unless configured otherwise). Both sides are trimmed and blank lines
//! are ignored. Only the first delimiter splits, so translations may contain it.

use crate::error::{ParseError, Result};
use crate::types::{Delimiter, RawEntry};

/// Parse dictionary content, failing on the first malformed line.
pub fn parse(content: &str, delimiter: Delimiter) -> Result<Vec<RawEntry>> {
    let mut entries = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        match parse_line(line, delimiter) {
            LineType::Entry(term, translation) => entries.push(RawEntry {
                term: term.to_string(),
                translation: translation.to_string(),
                line_number: line_num,
            }),
            LineType::Empty => {}
            LineType::NoDelimiter(text) => {
                return Err(ParseError::MissingSeparator {
                    line: line_num,
                    content: text.to_string(),
                })
            }
            LineType::NoTerm => return Err(ParseError::MissingTerm { line: line_num }),
            LineType::NoTranslation => {
                return Err(ParseError::MissingTranslation { line: line_num })
            }
        }
    }

    Ok(entries)
}

/// Parse dictionary content, silently skipping lines that are not entries.
pub fn parse_lenient(content: &str, delimiter: Delimiter) -> Vec<RawEntry> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match parse_line(line, delimiter) {
            LineType::Entry(term, translation) => Some(RawEntry {
                term: term.to_string(),
                translation: translation.to_string(),
                line_number: idx + 1,
            }),
            _ => None,
        })
        .collect()
}

fn parse_line(line: &str, delimiter: Delimiter) -> LineType<'_> {
    // A whitespace delimiter would be eaten by a full trim.
    let trimmed = if delimiter.as_char().is_whitespace() {
        line.trim_matches(|c: char| c.is_whitespace() && c != delimiter.as_char())
    } else {
        line.trim()
    };

    if trimmed.trim().is_empty() {
        return LineType::Empty;
    }

    match trimmed.split_once(delimiter.as_char()) {
        None => LineType::NoDelimiter(trimmed),
        Some((term, translation)) => {
            let (term, translation) = (term.trim(), translation.trim());
            if term.is_empty() {
                LineType::NoTerm
            } else if translation.is_empty() {
                LineType::NoTranslation
            } else {
                LineType::Entry(term, translation)
            }
        }
    }
}

enum LineType<'a> {
    Entry(&'a str, &'a str),
    NoDelimiter(&'a str),
    NoTerm,
    NoTranslation,
    Empty,
}

/// Render entries in the delimited format, one per line.
pub fn render<'a, I>(entries: I, delimiter: Delimiter) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    entries
        .into_iter()
        .map(|(term, translation)| format!("{term}{}{translation}\n", delimiter.as_char()))
        .collect()
}
