//! Per-letter guess feedback
//!
//! Each letter of a guess receives one verdict:
//! - Correct: right letter, right position (green)
//! - Present: letter is in the target, wrong position (yellow)
//! - Absent: letter is not in the target, or every copy is already accounted for (gray)

use super::word::{WORD_LENGTH, Word};

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

/// Feedback for a whole guess, one verdict per position
pub type Verdicts = [Verdict; WORD_LENGTH];

/// All greens
pub const SOLVED: Verdicts = [Verdict::Correct; WORD_LENGTH];

impl Verdict {
    /// Emoji tile for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Evaluate `guess` against `target`
///
/// Implements Wordle's feedback rules, including proper handling of
/// duplicate letters.
///
/// # Algorithm
/// 1. Count the letters of the target
/// 2. First pass: mark exact matches and remove them from the pool
/// 3. Second pass: mark remaining letters present while the pool still holds a copy
///
/// All exact matches must be consumed before any misplaced match, otherwise a
/// letter repeated in the guess can steal the copy a later green needs.
///
/// # Examples
/// ```
/// use wordle_week::core::{Verdict, Word, evaluate};
///
/// let guess = Word::new("SPEED").unwrap();
/// let target = Word::new("SPELL").unwrap();
///
/// assert_eq!(
///     evaluate(&guess, &target),
///     [
///         Verdict::Correct,
///         Verdict::Correct,
///         Verdict::Correct,
///         Verdict::Absent,
///         Verdict::Absent,
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Verdicts {
    let mut verdicts = [Verdict::Absent; WORD_LENGTH];
    let mut available = target.letter_counts();

    // First pass: greens
    for (i, verdict) in verdicts.iter_mut().enumerate() {
        let letter = guess.letter_at(i);
        if letter == target.letter_at(i) {
            *verdict = Verdict::Correct;
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: yellows from whatever is left
    for (i, verdict) in verdicts.iter_mut().enumerate() {
        if *verdict == Verdict::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&guess.letter_at(i))
            && *count > 0
        {
            *verdict = Verdict::Present;
            *count -= 1;
        }
    }

    verdicts
}

/// Check whether every position is correct
#[inline]
#[must_use]
pub fn is_solved(verdicts: &Verdicts) -> bool {
    *verdicts == SOLVED
}

/// Render a verdict row as emoji tiles, e.g. "🟩🟨⬜🟩🟨"
#[must_use]
pub fn to_emoji(verdicts: &Verdicts) -> String {
    verdicts.iter().map(|v| v.emoji()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    fn eval(guess: &str, target: &str) -> Verdicts {
        evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn identical_words_are_solved() {
        let verdicts = eval("APPLE", "APPLE");
        assert_eq!(verdicts, SOLVED);
        assert!(is_solved(&verdicts));
    }

    #[test]
    fn disjoint_words_are_all_absent() {
        assert_eq!(eval("CHAIR", "MOUSE"), [Absent; 5]);
    }

    #[test]
    fn surplus_duplicate_after_green_is_absent() {
        // SPELL has a single E, consumed by the green at position 2
        assert_eq!(
            eval("SPEED", "SPELL"),
            [Correct, Correct, Correct, Absent, Absent]
        );
    }

    #[test]
    fn green_takes_priority_over_earlier_yellow() {
        // Naive left-to-right would mark the leading L and E present before
        // the greens at positions 3 and 4 claim the only copies
        assert_eq!(
            eval("LEVEL", "HOTEL"),
            [Absent, Absent, Absent, Correct, Correct]
        );
        assert_eq!(
            eval("ALLOT", "TABLE"),
            [Present, Present, Absent, Absent, Present]
        );
    }

    #[test]
    fn repeated_letter_in_target_allows_multiple_yellows() {
        // DADDY has three Ds
        assert_eq!(
            eval("ADDED", "DADDY"),
            [Present, Present, Correct, Absent, Present]
        );
    }

    #[test]
    fn single_copy_marks_only_first_misplaced_occurrence() {
        // SWEET has two Es, GEESE has three; only two can be credited
        assert_eq!(
            eval("GEESE", "SWEET"),
            [Absent, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn correct_count_matches_exact_positions() {
        let words = ["APPLE", "SPEED", "SPELL", "SWEET", "PIZZA", "DADDY", "EAGLE"];
        for guess in words {
            for target in words {
                let verdicts = eval(guess, target);
                let exact = guess
                    .bytes()
                    .zip(target.bytes())
                    .filter(|(g, t)| g == t)
                    .count();
                let greens = verdicts.iter().filter(|&&v| v == Correct).count();
                assert_eq!(greens, exact, "{guess} vs {target}");
            }
        }
    }

    #[test]
    fn credited_letters_never_exceed_target_count() {
        let words = ["APPLE", "SPEED", "SPELL", "SWEET", "PIZZA", "DADDY", "EAGLE"];
        for guess in words {
            for target in words {
                let verdicts = eval(guess, target);
                for letter in guess.bytes() {
                    let credited = guess
                        .bytes()
                        .zip(verdicts)
                        .filter(|&(g, v)| g == letter && v != Absent)
                        .count();
                    let in_target = target.bytes().filter(|&t| t == letter).count();
                    assert!(credited <= in_target, "{guess} vs {target}");
                }
            }
        }
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(
            to_emoji(&[Correct, Present, Absent, Correct, Present]),
            "🟩🟨⬜🟩🟨"
        );
    }
}
