//! Word lists for the game
//!
//! The embedded list is compiled into the binary; a custom list can be loaded
//! from a text file. Either way the game sees a `WordList`: the set of accepted
//! guesses, which doubles as the pool targets are drawn from.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors building a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list contains no valid five-letter words")]
    Empty,
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A fixed, non-empty set of playable words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Build a list from words, dropping duplicates but keeping first-seen order
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if no words are given.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, WordListError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words.into_iter().filter(|w| index.insert(*w)).collect();

        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self { words, index })
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if the embedded list holds no valid words.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// Load a list from a file with one word per line
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Io` if the file cannot be read, or
    /// `WordListError::Empty` if it has no valid words.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(words)
    }

    /// Check if a word is in the list
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept alongside `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Pick a word uniformly at random
    ///
    /// If the pick equals `avoid` and there is anything else to choose from,
    /// draw once more. Repeats are made unlikely, not impossible.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R, avoid: Option<&Word>) -> Word {
        let word = self.words[rng.random_range(0..self.words.len())];

        if self.words.len() > 1 && avoid == Some(&word) {
            return self.words[rng.random_range(0..self.words.len())];
        }

        word
    }
}
