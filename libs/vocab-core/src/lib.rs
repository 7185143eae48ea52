//! Core vocabulary trainer library shared by the trainer and its companion tools.
//!
//! Provides:
//! - Dictionary parser (strict and lenient) and format conversion
//! - Vocabulary store with overwrite-last merging
//! - Drill engine (multiple-choice and free-recall passes, passive review)
//! - Answer matching for typed answers
//! - `key = value` configuration
//!
//! Nothing here touches files or the terminal; callers hand in content and a [`drill::Console`].

pub mod config;
pub mod convert;
pub mod drill;
pub mod duplicates;
pub mod error;
pub mod matching;
pub mod parser;
pub mod types;
pub mod vocabulary;

pub use config::Config;
pub use convert::{convert, Direction};
pub use drill::{
    pick_candidates, run_choice, run_recall, run_review, ChoiceTurn, Console, DrillSummary,
    Progress, RecallTurn, ReviewConsole, Verdict,
};
pub use duplicates::{find_duplicates, Duplicate};
pub use error::{ConfigError, DrillError, ParseError, Result};
pub use matching::{check_choice, compare_answers};
pub use parser::{parse, parse_lenient};
pub use types::{Delimiter, DrillItem, OptionSeparator, RawEntry, VocabularyEntry};
pub use vocabulary::{Overwrite, Vocabulary};
