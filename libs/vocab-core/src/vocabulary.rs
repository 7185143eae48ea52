//! In-memory vocabulary built from one or more dictionaries.

use crate::types::{DrillItem, RawEntry, VocabularyEntry};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeMap, BTreeSet};

/// A term whose translation was replaced while merging dictionaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overwrite {
    pub term: String,
    pub previous: String,
    pub current: String,
}

/// Mapping from term to translation. Terms are unique.
///
/// Iteration order carries no meaning; drills shuffle explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    entries: BTreeMap<String, String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert entries in order, reporting every term whose translation changed.
    ///
    /// Repeating a term with the same translation is not an overwrite.
    pub fn insert_all<I>(&mut self, entries: I) -> Vec<Overwrite>
    where
        I: IntoIterator<Item = VocabularyEntry>,
    {
        entries
            .into_iter()
            .filter_map(|entry| {
                let VocabularyEntry { term, translation } = entry;
                let current = translation.clone();
                self.entries
                    .insert(term.clone(), translation)
                    .filter(|previous| *previous != current)
                    .map(|previous| Overwrite {
                        term,
                        previous,
                        current,
                    })
            })
            .collect()
    }

    /// Merge another vocabulary into this one. Later terms overwrite earlier ones.
    pub fn merge(&mut self, other: Vocabulary) -> Vec<Overwrite> {
        self.insert_all(
            other
                .entries
                .into_iter()
                .map(|(term, translation)| VocabularyEntry { term, translation }),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All entries in random order.
    pub fn shuffled_items<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<DrillItem> {
        let mut items: Vec<DrillItem> = self
            .iter()
            .map(|(term, translation)| DrillItem::new(term, translation))
            .collect();
        items.shuffle(rng);
        items
    }

    /// Distinct translations, used as the distractor pool.
    pub fn translations(&self) -> Vec<String> {
        self.entries
            .values()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Repeated terms keep their last translation silently; see [`Vocabulary::insert_all`].
impl FromIterator<VocabularyEntry> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = VocabularyEntry>>(iter: T) -> Self {
        let mut vocabulary = Self::new();
        vocabulary.insert_all(iter);
        vocabulary
    }
}

impl FromIterator<RawEntry> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = RawEntry>>(iter: T) -> Self {
        iter.into_iter().map(VocabularyEntry::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::types::Delimiter;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn vocab(pairs: &[(&str, &str)]) -> Vocabulary {
        pairs
            .iter()
            .map(|(t, r)| VocabularyEntry::new(*t, *r))
            .collect()
    }

    #[test]
    fn build_from_parsed_file() {
        let entries = parse("cat\tkot\ndog\thund\n", Delimiter::default()).unwrap();
        let vocabulary: Vocabulary = entries.into_iter().collect();
        assert_eq!(vocabulary, vocab(&[("cat", "kot"), ("dog", "hund")]));
        assert_eq!(vocabulary.get("cat"), Some("kot"));
    }

    #[test]
    fn merge_keeps_last_translation() {
        let mut merged = vocab(&[("cat", "kot"), ("dog", "pies")]);
        let overwrites = merged.merge(vocab(&[("dog", "hund"), ("owl", "sowa")]));

        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("dog"), Some("hund"));
        assert_eq!(
            overwrites,
            vec![Overwrite {
                term: "dog".to_string(),
                previous: "pies".to_string(),
                current: "hund".to_string(),
            }]
        );
    }

    #[test]
    fn merge_same_pair_is_not_an_overwrite() {
        let mut merged = vocab(&[("cat", "kot")]);
        let overwrites = merged.merge(vocab(&[("cat", "kot")]));
        assert!(overwrites.is_empty());
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn insert_all_reports_terms_repeated_in_one_file() {
        let entries = parse("dog\tpies\ncat\tkot\ndog\thund\ncat\tkot\n", Delimiter::default())
            .unwrap()
            .into_iter()
            .map(VocabularyEntry::from);

        let mut vocabulary = Vocabulary::new();
        let overwrites = vocabulary.insert_all(entries);

        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.get("dog"), Some("hund"));
        assert_eq!(
            overwrites,
            vec![Overwrite {
                term: "dog".to_string(),
                previous: "pies".to_string(),
                current: "hund".to_string(),
            }]
        );
    }

    #[test]
    fn translations_are_distinct_and_sorted() {
        let vocabulary = vocab(&[("car", "auto"), ("automobile", "auto"), ("bike", "rower")]);
        assert_eq!(vocabulary.translations(), vec!["auto", "rower"]);
    }

    #[test]
    fn shuffled_items_cover_every_entry() {
        let vocabulary = vocab(&[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut items = vocabulary.shuffled_items(&mut rng);
        items.sort();
        assert_eq!(
            items,
            vec![
                DrillItem::new("a", "1"),
                DrillItem::new("b", "2"),
                DrillItem::new("c", "3"),
                DrillItem::new("d", "4"),
            ]
        );
    }
}
