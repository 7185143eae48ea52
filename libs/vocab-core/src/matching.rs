//! Answer matching for free-recall drills.

/// Compare a typed answer to the expected term.
///
/// Surrounding whitespace is ignored and letter case does not matter.
/// Nothing else is normalized: inner spacing and accents must match.
pub fn compare_answers(typed: &str, expected: &str) -> bool {
    typed.trim().to_lowercase() == expected.to_lowercase()
}

/// Validate a 1-based multiple-choice answer against the displayed candidates.
///
/// Input that is not a number counts as choice 0, which is always wrong.
pub fn check_choice(input: &str, candidates: &[String], expected: &str) -> bool {
    let choice = input.trim().parse::<usize>().unwrap_or(0);
    choice
        .checked_sub(1)
        .and_then(|idx| candidates.get(idx))
        .is_some_and(|candidate| candidate == expected)
}
