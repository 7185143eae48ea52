//! Drill engine.
//!
//! A drill walks the unlearned items pass after pass. Every item answered
//! wrongly stays for the next pass, every correct answer drops the item, and
//! the drill ends once nothing is left. Two variants share the loop:
//! [`choice`] (pick the translation from numbered candidates) and [`recall`]
//! (type the term for a translation). [`review`] is the unjudged walk-through.

pub mod choice;
pub mod recall;
pub mod review;

use crate::error::DrillError;
use crate::types::DrillItem;
use std::collections::HashSet;
use std::io;

pub use choice::{pick_candidates, run_choice};
pub use recall::run_recall;
pub use review::{run_review, ReviewConsole};

/// Position of the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Pass number, starting at 1.
    pub pass: usize,
    /// Position within the pass, starting at 1.
    pub position: usize,
    /// Number of items in this pass.
    pub total: usize,
}

/// A multiple-choice question.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceTurn<'a> {
    pub progress: Progress,
    pub term: &'a str,
    pub candidates: &'a [String],
}

/// A free-recall question.
#[derive(Debug, Clone, Copy)]
pub struct RecallTurn<'a> {
    pub progress: Progress,
    pub translation: &'a str,
}

/// Outcome of a single answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict<'a> {
    Correct,
    Wrong { expected: &'a str },
}

/// The user side of a drill.
///
/// `choose` and `recall` return the raw answer line, or `None` once input is closed.
pub trait Console {
    fn choose(&mut self, turn: &ChoiceTurn<'_>) -> io::Result<Option<String>>;

    fn recall(&mut self, turn: &RecallTurn<'_>) -> io::Result<Option<String>>;

    fn verdict(&mut self, verdict: &Verdict<'_>) -> io::Result<()>;
}

/// What happened during a finished drill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrillSummary {
    /// Distinct items drilled.
    pub items: usize,
    pub passes: usize,
    /// Wrong answers over all passes.
    pub mistakes: usize,
    /// Unlearned items at the start of each pass.
    pub pass_sizes: Vec<usize>,
}

/// Run passes until every item has been answered correctly once.
///
/// `ask` returns whether the item was answered correctly.
fn run_passes<F>(items: Vec<DrillItem>, mut ask: F) -> Result<DrillSummary, DrillError>
where
    F: FnMut(&DrillItem, Progress) -> Result<bool, DrillError>,
{
    let mut seen = HashSet::new();
    let mut unlearned: Vec<DrillItem> = items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect();

    if unlearned.is_empty() {
        return Err(DrillError::EmptyVocabulary);
    }

    let mut summary = DrillSummary {
        items: unlearned.len(),
        ..DrillSummary::default()
    };

    while !unlearned.is_empty() {
        summary.passes += 1;
        let total = unlearned.len();
        summary.pass_sizes.push(total);

        let mut next_pass = Vec::new();
        for (idx, item) in unlearned.into_iter().enumerate() {
            let progress = Progress {
                pass: summary.passes,
                position: idx + 1,
                total,
            };
            if !ask(&item, progress)? {
                summary.mistakes += 1;
                next_pass.push(item);
            }
        }
        unlearned = next_pass;
    }

    Ok(summary)
}
