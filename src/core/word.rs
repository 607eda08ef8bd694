//! Five-letter word representation
//!
//! A `Word` is the validated, uppercase form of a guess or target.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A validated five-letter word, stored as uppercase ASCII bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string, normalising to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_week::core::Word;
    ///
    /// let word = Word::new("apple").unwrap();
    /// assert_eq!(word.as_str(), "APPLE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            letters: letters.map(|b| b.to_ascii_uppercase()),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Letters are validated ASCII, so this never falls back
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used by guess evaluation to handle duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("APPLE").unwrap();
        assert_eq!(word.as_str(), "APPLE");
        assert_eq!(word.letters(), b"APPLE");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("apple").unwrap();
        assert_eq!(word.as_str(), "APPLE");

        let word2 = Word::new("ApPlE").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("appl3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("app e"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("appl!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_creation_non_ascii() {
        assert_eq!(Word::new("café!"), Err(WordError::NonAscii));
        assert_eq!(Word::new("ÄPFEL"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("chair").unwrap();
        assert_eq!(word.letter_at(0), b'C');
        assert_eq!(word.letter_at(2), b'A');
        assert_eq!(word.letter_at(4), b'R');
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'S'), Some(&1));
        assert_eq!(counts.get(&b'E'), Some(&2));
        assert_eq!(counts.get(&b'D'), Some(&1));
        assert_eq!(counts.get(&b'Z'), None);
    }

    #[test]
    fn word_letter_counts_all_same() {
        let word = Word::new("aaaaa").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&b'A'), Some(&5));
    }

    #[test]
    fn word_parse_and_display() {
        let word: Word = "daddy".parse().unwrap();
        assert_eq!(format!("{word}"), "DADDY");
    }
}
