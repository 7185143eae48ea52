//! Passive review: show each term, then its translation. Nothing is graded.

use super::Progress;
use crate::error::DrillError;
use crate::types::DrillItem;
use std::io;

pub trait ReviewConsole {
    fn show_term(&mut self, progress: Progress, term: &str) -> io::Result<()>;

    fn show_translation(&mut self, translation: &str) -> io::Result<()>;

    /// Wait for the configured delay.
    fn pause(&mut self) -> io::Result<()>;
}

/// Walk through `items` once. Returns the number of items shown.
pub fn run_review<C>(items: &[DrillItem], console: &mut C) -> Result<usize, DrillError>
where
    C: ReviewConsole + ?Sized,
{
    if items.is_empty() {
        return Err(DrillError::EmptyVocabulary);
    }

    let total = items.len();
    for (idx, item) in items.iter().enumerate() {
        let progress = Progress {
            pass: 1,
            position: idx + 1,
            total,
        };
        console.show_term(progress, &item.term)?;
        console.pause()?;
        console.show_translation(&item.translation)?;
        console.pause()?;
    }

    Ok(total)
}
