//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing dictionary content.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing separator at line {line}: {content:?}")]
    MissingSeparator { line: usize, content: String },

    #[error("missing term at line {line}")]
    MissingTerm { line: usize },

    #[error("missing translation at line {line}")]
    MissingTranslation { line: usize },

    #[error("term without translation at line {line}")]
    UnpairedTerm { line: usize },
}

/// Errors raised while reading the `key = value` configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Errors that end a drill session early.
#[derive(Debug, Error)]
pub enum DrillError {
    #[error("vocabulary is empty")]
    EmptyVocabulary,

    #[error("input closed")]
    InputClosed,

    #[error("console error: {0}")]
    Io(#[from] std::io::Error),
}
