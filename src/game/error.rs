//! Recoverable guess-submission errors

use thiserror::Error;

/// Why a guess was rejected
///
/// Both variants are shown to the player as a short message and leave the
/// session otherwise untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Not enough letters")]
    IncompleteGuess,
    #[error("Not in word list")]
    NotInWordList(String),
}
