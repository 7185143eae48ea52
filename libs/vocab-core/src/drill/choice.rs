//! Multiple-choice drill: pick the translation of a term.

use super::{run_passes, ChoiceTurn, Console, DrillSummary, Verdict};
use crate::error::DrillError;
use crate::matching::check_choice;
use crate::types::DrillItem;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

/// Sample the candidates shown for one question.
///
/// Draws `min(variants, pool.len())` distinct pool entries. When the correct
/// translation was not drawn it replaces the last one drawn, so the count is
/// kept. The result is shuffled.
pub fn pick_candidates<R>(pool: &[String], correct: &str, variants: usize, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let amount = variants.min(pool.len());
    let mut candidates: Vec<String> = pool.choose_multiple(rng, amount).cloned().collect();

    if !candidates.iter().any(|c| c == correct) {
        candidates.pop();
        candidates.push(correct.to_string());
    }

    candidates.shuffle(rng);
    candidates
}

/// Run a multiple-choice drill over `items`.
///
/// `pool` is the distractor pool (every distinct translation). Candidates are
/// drawn anew for every question, the item order is kept between passes.
pub fn run_choice<C, R>(
    items: Vec<DrillItem>,
    pool: &[String],
    variants: usize,
    console: &mut C,
    rng: &mut R,
) -> Result<DrillSummary, DrillError>
where
    C: Console + ?Sized,
    R: Rng + ?Sized,
{
    run_passes(items, |item, progress| {
        let candidates = pick_candidates(pool, &item.translation, variants, rng);
        let turn = ChoiceTurn {
            progress,
            term: &item.term,
            candidates: &candidates,
        };
        let answer = console.choose(&turn)?.ok_or(DrillError::InputClosed)?;

        let correct = check_choice(&answer, &candidates, &item.translation);
        let verdict = if correct {
            Verdict::Correct
        } else {
            Verdict::Wrong {
                expected: &item.translation,
            }
        };
        console.verdict(&verdict)?;
        Ok(correct)
    })
}
