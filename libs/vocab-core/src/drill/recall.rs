//! Free-recall drill: type the term for a translation.

use super::{run_passes, Console, DrillSummary, RecallTurn, Verdict};
use crate::error::DrillError;
use crate::matching::compare_answers;
use crate::types::DrillItem;

pub fn run_recall<C>(items: Vec<DrillItem>, console: &mut C) -> Result<DrillSummary, DrillError>
where
    C: Console + ?Sized,
{
    run_passes(items, |item, progress| {
        let turn = RecallTurn {
            progress,
            translation: &item.translation,
        };
        let answer = console.recall(&turn)?.ok_or(DrillError::InputClosed)?;

        let correct = compare_answers(&answer, &item.term);
        let verdict = if correct {
            Verdict::Correct
        } else {
            Verdict::Wrong {
                expected: &item.term,
            }
        };
        console.verdict(&verdict)?;
        Ok(correct)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill::tests::{sample_vocabulary, Behavior, Player};
    use crate::drill::{ChoiceTurn, Progress};
    use std::io;

    struct Typist {
        answers: Vec<&'static str>,
        prompts: Vec<(Progress, String)>,
        verdicts: Vec<String>,
    }

    impl Console for Typist {
        fn choose(&mut self, _turn: &ChoiceTurn<'_>) -> io::Result<Option<String>> {
            unreachable!("recall drills never offer candidates")
        }

        fn recall(&mut self, turn: &RecallTurn<'_>) -> io::Result<Option<String>> {
            self.prompts.push((turn.progress, turn.translation.to_string()));
            Ok(self.answers.pop().map(str::to_string))
        }

        fn verdict(&mut self, verdict: &Verdict<'_>) -> io::Result<()> {
            self.verdicts.push(match verdict {
                Verdict::Correct => "correct".to_string(),
                Verdict::Wrong { expected } => format!("wrong: {expected}"),
            });
            Ok(())
        }
    }

    #[test]
    fn wrong_answer_shows_term_and_repeats() {
        let mut typist = Typist {
            // popped from the back
            answers: vec!["APPLE", "aple"],
            prompts: Vec::new(),
            verdicts: Vec::new(),
        };
        let summary = run_recall(vec![DrillItem::new("Apple", "jablko")], &mut typist).unwrap();

        assert_eq!(summary.passes, 2);
        assert_eq!(summary.mistakes, 1);
        assert_eq!(typist.verdicts, vec!["wrong: Apple", "correct"]);
        assert_eq!(typist.prompts[1].0.pass, 2);
        assert_eq!(typist.prompts[1].1, "jablko");
    }

    #[test]
    fn closed_input_ends_the_drill() {
        let mut typist = Typist {
            answers: Vec::new(),
            prompts: Vec::new(),
            verdicts: Vec::new(),
        };
        let result = run_recall(vec![DrillItem::new("cat", "kot")], &mut typist);
        assert!(matches!(result, Err(DrillError::InputClosed)));
        assert!(typist.verdicts.is_empty());
    }

    #[test]
    fn adversary_keeps_every_item() {
        let vocabulary = sample_vocabulary(4);
        let mut player = Player::new(&vocabulary, Behavior::Adversary).closing_after(12);
        let items: Vec<DrillItem> = vocabulary
            .iter()
            .map(|(t, r)| DrillItem::new(t, r))
            .collect();
        let result = run_recall(items, &mut player);
        assert!(matches!(result, Err(DrillError::InputClosed)));
        assert_eq!(player.verdicts, vec![false; 12]);
    }
}
