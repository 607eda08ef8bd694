//! WordleWeek
//!
//! A Wordle game: six tries to guess a secret five-letter word, with
//! per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_week::game::{Game, GameStatus};
//! use wordle_week::wordlists::WordList;
//!
//! let mut game = Game::seeded(WordList::embedded().unwrap(), 42);
//!
//! let target = game.target().to_string();
//! for letter in target.chars() {
//!     game.add_letter(letter);
//! }
//! game.submit_guess().unwrap();
//!
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
