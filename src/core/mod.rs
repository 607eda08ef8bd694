//! Core domain types for Wordle
//!
//! Words and guess evaluation. Everything here is pure and deterministic.

mod verdict;
mod word;

pub use verdict::{SOLVED, Verdict, Verdicts, evaluate, is_solved, to_emoji};
pub use word::{WORD_LENGTH, Word, WordError};
