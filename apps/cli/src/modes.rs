//! Study mode drivers: `look`, `learn` and `test`.

use std::io::Write;

use anyhow::Result;
use rand::Rng;
use vocab_core::{run_choice, run_recall, run_review, Config, DrillError, DrillSummary, Vocabulary};

use crate::terminal::{LineSource, TerminalConsole};

pub const LEARN_HEADER: &str = "select correct variant (type number and press enter)";
pub const TEST_HEADER: &str = "type the word for each translation";

/// How a study session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Passive review showed this many words.
    Reviewed(usize),
    Drilled(DrillSummary),
    /// Input closed before the session was over.
    Interrupted,
}

/// Show every word once: term, pause, translation, pause.
pub fn look<W, L, R>(
    vocabulary: &Vocabulary,
    console: &mut TerminalConsole<W, L>,
    rng: &mut R,
) -> Result<Outcome>
where
    W: Write,
    L: LineSource,
    R: Rng + ?Sized,
{
    let items = vocabulary.shuffled_items(rng);
    let shown = run_review(&items, console)?;
    Ok(Outcome::Reviewed(shown))
}

/// Multiple-choice drill: pick the translation of each term.
pub fn learn<W, L, R>(
    config: &Config,
    vocabulary: &Vocabulary,
    console: &mut TerminalConsole<W, L>,
    rng: &mut R,
) -> Result<Outcome>
where
    W: Write,
    L: LineSource,
    R: Rng + ?Sized,
{
    console.announce(LEARN_HEADER)?;
    let items = vocabulary.shuffled_items(rng);
    let pool = vocabulary.translations();
    let result = run_choice(items, &pool, config.variants, console, rng);
    finish(result, console)
}

/// Free-recall drill: type the term for each translation.
pub fn test<W, L, R>(
    vocabulary: &Vocabulary,
    console: &mut TerminalConsole<W, L>,
    rng: &mut R,
) -> Result<Outcome>
where
    W: Write,
    L: LineSource,
    R: Rng + ?Sized,
{
    console.announce(TEST_HEADER)?;
    let items = vocabulary.shuffled_items(rng);
    let result = run_recall(items, console);
    finish(result, console)
}

fn finish<W: Write, L: LineSource>(
    result: std::result::Result<DrillSummary, DrillError>,
    console: &mut TerminalConsole<W, L>,
) -> Result<Outcome> {
    match result {
        Ok(summary) => {
            console.report(&summary)?;
            tracing::info!(
                items = summary.items,
                passes = summary.passes,
                mistakes = summary.mistakes,
                "drill finished"
            );
            Ok(Outcome::Drilled(summary))
        }
        Err(DrillError::InputClosed) => {
            tracing::info!("input closed, leaving drill");
            Ok(Outcome::Interrupted)
        }
        Err(err) => Err(err.into()),
    }
}
