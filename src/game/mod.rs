//! Game session
//!
//! The state machine that owns a session, its board, the recoverable
//! submission errors and the deferred "new game" notice.

mod board;
mod error;
pub mod notice;
mod state;

pub use board::{Board, Cell, MAX_GUESSES, Row};
pub use error::GuessError;
pub use state::{Game, GameStatus, NEW_GAME_NOTICE, SubmitOutcome};
