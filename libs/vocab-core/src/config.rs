//! Trainer configuration.
//!
//! The config file is a list of `key = value` lines. Order does not matter,
//! later duplicates win, unknown keys are ignored and lines without `=` or
//! starting with `#` are skipped.

use crate::error::ConfigError;
use crate::types::{Delimiter, OptionSeparator};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

pub const LOOK_DELAY_KEY: &str = "look_delay_time_s";
pub const VOCABULARY_DIR_KEY: &str = "vocabulary_dir";
pub const VARIANTS_KEY: &str = "learn_variants_number";
pub const OPTION_SEPARATOR_KEY: &str = "separator_for_learn";
pub const DICTIONARY_SEPARATOR_KEY: &str = "dictionary_separator";

/// Immutable trainer settings, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seconds paused between term and translation in review mode.
    pub look_delay_secs: u64,
    pub vocabulary_dir: PathBuf,
    /// Number of multiple-choice candidates, at least one.
    pub variants: usize,
    pub option_separator: OptionSeparator,
    pub dictionary_delimiter: Delimiter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            look_delay_secs: 2,
            vocabulary_dir: PathBuf::from("vocabularies"),
            variants: 4,
            option_separator: OptionSeparator::default(),
            dictionary_delimiter: Delimiter::default(),
        }
    }
}

impl Config {
    /// Parse config file content, falling back to defaults for missing keys.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let values = read_pairs(content);
        let mut config = Self::default();

        if let Some(value) = values.get(LOOK_DELAY_KEY) {
            config.look_delay_secs = value
                .parse::<u64>()
                .map_err(|_| invalid(LOOK_DELAY_KEY, value, "expected whole seconds"))?;
        }
        if let Some(value) = values.get(VOCABULARY_DIR_KEY) {
            config.vocabulary_dir = PathBuf::from(*value);
        }
        if let Some(value) = values.get(VARIANTS_KEY) {
            config.variants = value
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| invalid(VARIANTS_KEY, value, "expected a positive integer"))?;
        }
        if let Some(value) = values.get(OPTION_SEPARATOR_KEY) {
            config.option_separator = OptionSeparator::from_name(value)
                .ok_or_else(|| invalid(OPTION_SEPARATOR_KEY, value, "expected space, tab or eol"))?;
        }
        if let Some(value) = values.get(DICTIONARY_SEPARATOR_KEY) {
            config.dictionary_delimiter = Delimiter::from_name(value).ok_or_else(|| {
                invalid(
                    DICTIONARY_SEPARATOR_KEY,
                    value,
                    "expected a separator name or a single character",
                )
            })?;
        }

        Ok(config)
    }

    pub fn look_delay(&self) -> Duration {
        Duration::from_secs(self.look_delay_secs)
    }
}

fn read_pairs(content: &str) -> HashMap<&str, &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .collect()
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
        let config = Config::default();
        assert_eq!(config.look_delay(), Duration::from_secs(2));
        assert_eq!(config.vocabulary_dir, PathBuf::from("vocabularies"));
        assert_eq!(config.variants, 4);
        assert_eq!(config.option_separator, OptionSeparator::Space);
        assert_eq!(config.dictionary_delimiter, Delimiter('\t'));
    }

    #[test]
    fn parse_all_keys_in_any_order() {
        let content = "separator_for_learn = eol\n\
                       learn_variants_number=6\n\
                       vocabulary_dir = /tmp/words \n\
                       look_delay_time_s = 0\n\
                       dictionary_separator = comma\n";
        let config = Config::parse(content).unwrap();
        assert_eq!(
            config,
            Config {
                look_delay_secs: 0,
                vocabulary_dir: PathBuf::from("/tmp/words"),
                variants: 6,
                option_separator: OptionSeparator::Eol,
                dictionary_delimiter: Delimiter(','),
            }
        );
    }

    #[test]
    fn unknown_keys_comments_and_junk_are_ignored() {
        let content = "# trainer settings\ncolour = blue\njust some text\n\nlearn_variants_number = 3\n";
        let config = Config::parse(content).unwrap();
        assert_eq!(config.variants, 3);
        assert_eq!(config.look_delay_secs, 2);
    }

    #[test]
    fn value_may_contain_equals_sign() {
        let config = Config::parse("vocabulary_dir = words=new").unwrap();
        assert_eq!(config.vocabulary_dir, PathBuf::from("words=new"));
    }

    #[test]
    fn last_duplicate_key_wins() {
        let config = Config::parse("look_delay_time_s = 1\nlook_delay_time_s = 5").unwrap();
        assert_eq!(config.look_delay_secs, 5);
    }

    #[test]
    fn reject_non_numeric_delay() {
        let result = Config::parse("look_delay_time_s = soon");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref key, .. }) if key == LOOK_DELAY_KEY
        ));
    }

    #[test]
    fn reject_zero_variants() {
        assert!(Config::parse("learn_variants_number = 0").is_err());
    }

    #[test]
    fn reject_unknown_option_separator() {
        let result = Config::parse("separator_for_learn = comma");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref value, .. }) if value == "comma"
        ));
    }
}
