//! Detection of terms that appear more than once across dictionaries.

use crate::types::RawEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A term found in more than one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duplicate {
    pub term: String,
    /// Dictionary names, once per occurrence, in scan order.
    pub dictionaries: Vec<String>,
}

/// Find repeated terms.
///
/// `sources` yields each dictionary name with its entries, in the order the
/// dictionaries should be reported. A term repeated within one dictionary
/// lists that dictionary once per occurrence. Results follow the order in
/// which terms were first seen.
pub fn find_duplicates<I, N>(sources: I) -> Vec<Duplicate>
where
    I: IntoIterator<Item = (N, Vec<RawEntry>)>,
    N: AsRef<str>,
{
    let mut found: Vec<Duplicate> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (name, entries) in sources {
        for entry in entries {
            let slot = *index.entry(entry.term.clone()).or_insert_with(|| {
                found.push(Duplicate {
                    term: entry.term.clone(),
                    dictionaries: Vec::new(),
                });
                found.len() - 1
            });
            found[slot].dictionaries.push(name.as_ref().to_string());
        }
    }

    found.retain(|d| d.dictionaries.len() > 1);
    found
}
