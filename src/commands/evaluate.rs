//! Word evaluation command
//!
//! Scores one word against another without starting a game.

use crate::core::{Verdicts, Word, WordError, evaluate};

/// Result of evaluating a guess against a target
pub struct Evaluation {
    pub guess: Word,
    pub target: Word,
    pub verdicts: Verdicts,
}

/// Evaluate `guess` against `target`
///
/// Neither word has to be in the word list.
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn evaluate_words(guess: &str, target: &str) -> Result<Evaluation, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;

    Ok(Evaluation {
        guess,
        target,
        verdicts: evaluate(&guess, &target),
    })
}
