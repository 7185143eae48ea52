//! Conversion between the line-pair and the delimited dictionary formats.
//!
//! # Line-pair format
//! ```text
//! cat
//! kot
//!
//! dog
//! hund
//! ```
//! Non-blank lines alternate between term and translation.

use crate::error::{ParseError, Result};
use crate::parser;
use crate::types::{Delimiter, RawEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LinesToDelimited,
    DelimitedToLines,
}

/// Convert dictionary content in the given direction.
pub fn convert(content: &str, direction: Direction, delimiter: Delimiter) -> Result<String> {
    match direction {
        Direction::LinesToDelimited => {
            let entries = parse_line_pairs(content)?;
            Ok(parser::render(pairs(&entries), delimiter))
        }
        Direction::DelimitedToLines => {
            let entries = parser::parse(content, delimiter)?;
            Ok(render_line_pairs(&entries))
        }
    }
}

/// Parse the line-pair format.
pub fn parse_line_pairs(content: &str) -> Result<Vec<RawEntry>> {
    let mut entries = Vec::new();
    let mut pending: Option<(usize, &str)> = None;

    let lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    for (line_num, line) in lines {
        match pending.take() {
            None => pending = Some((line_num, line)),
            Some((term_line, term)) => entries.push(RawEntry {
                term: term.to_string(),
                translation: line.to_string(),
                line_number: term_line,
            }),
        }
    }

    if let Some((line, _)) = pending {
        return Err(ParseError::UnpairedTerm { line });
    }

    Ok(entries)
}

pub fn render_line_pairs(entries: &[RawEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}\n{}\n", e.term, e.translation))
        .collect()
}

fn pairs(entries: &[RawEntry]) -> impl Iterator<Item = (&str, &str)> {
    entries
        .iter()
        .map(|e| (e.term.as_str(), e.translation.as_str()))
}
