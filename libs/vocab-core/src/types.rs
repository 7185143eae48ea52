//! Core types for the vocabulary trainer.

use std::fmt;

/// A term and its translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VocabularyEntry {
    pub term: String,
    pub translation: String,
}

impl VocabularyEntry {
    pub fn new(term: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            translation: translation.into(),
        }
    }
}

/// Entry parsed from a dictionary file, remembering where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub term: String,
    pub translation: String,
    pub line_number: usize,
}

impl From<RawEntry> for VocabularyEntry {
    fn from(raw: RawEntry) -> Self {
        Self {
            term: raw.term,
            translation: raw.translation,
        }
    }
}

/// An item under quiz. Two items with the same term and translation are the same item.
pub type DrillItem = VocabularyEntry;

/// How multiple-choice candidates are separated on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionSeparator {
    #[default]
    Space,
    Tab,
    Eol,
}

impl OptionSeparator {
    /// The text placed between two candidates.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Tab => "\t",
            Self::Eol => "\n",
        }
    }

    /// Parse from a config value.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "space" => Some(Self::Space),
            "tab" => Some(Self::Tab),
            "eol" => Some(Self::Eol),
            _ => None,
        }
    }
}

/// Field delimiter of the delimited dictionary format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter(pub char);

impl Default for Delimiter {
    fn default() -> Self {
        Self('\t')
    }
}

impl Delimiter {
    pub fn as_char(self) -> char {
        self.0
    }

    /// Parse a named delimiter (`tab`, `comma`, ...) or a single non-whitespace character.
    pub fn from_name(s: &str) -> Option<Self> {
        let c = match s {
            "tab" => '\t',
            "comma" => ',',
            "semicolon" => ';',
            "pipe" => '|',
            "space" => ' ',
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_whitespace() => c,
                    _ => return None,
                }
            }
        };
        Some(Self(c))
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            '\t' => f.write_str("tab"),
            ' ' => f.write_str("space"),
            c => write!(f, "{c}"),
        }
    }
}
