//! Game session state machine
//!
//! `Game` is the single owner of a session: target word, board, typing
//! position and status. Front ends mutate it only through `add_letter`,
//! `delete_letter`, `submit_guess` and `start_new_game`, and render from its
//! accessors.

use super::board::{Board, MAX_GUESSES};
use super::error::GuessError;
use super::notice::Deferred;
use crate::core::{WORD_LENGTH, Word, evaluate};
use crate::wordlists::WordList;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// How long the "new game" notice stays up
pub const NEW_GAME_NOTICE: Duration = Duration::from_secs(1);

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and Lost are terminal
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of a submission that was not rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The game was already over
    Ignored,
    /// Valid guess, play continues on the next row
    NextRow,
    Won,
    Lost,
}

/// One Wordle session
pub struct Game<R = StdRng> {
    words: WordList,
    target: Word,
    board: Board,
    current_row: usize,
    current_guess: String,
    status: GameStatus,
    message: Option<String>,
    new_game_notice: Deferred,
    rng: R,
}

impl Game<StdRng> {
    /// Start a session with an OS-seeded random target
    #[must_use]
    pub fn new(words: WordList) -> Self {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Start a session whose target sequence is reproducible
    #[must_use]
    pub fn seeded(words: WordList, seed: u64) -> Self {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Start a session drawing targets from `rng`
    pub fn with_rng(words: WordList, mut rng: R) -> Self {
        let target = words.pick(&mut rng, None);
        trace!("target selected: {target}");

        Self {
            words,
            target,
            board: Board::default(),
            current_row: 0,
            current_guess: String::with_capacity(WORD_LENGTH),
            status: GameStatus::InProgress,
            message: None,
            new_game_notice: Deferred::default(),
            rng,
        }
    }

    /// Type a letter into the current row
    ///
    /// Ignored unless the game is in progress, the row has room and `letter`
    /// is an ASCII letter. Returns whether the letter was taken.
    pub fn add_letter(&mut self, letter: char) -> bool {
        if self.status.is_over()
            || self.current_guess.len() >= WORD_LENGTH
            || !letter.is_ascii_alphabetic()
        {
            return false;
        }

        self.message = None;

        let letter = letter.to_ascii_uppercase();
        self.current_guess.push(letter);
        self.board
            .row_mut(self.current_row)
            .set_letter(self.current_guess.len() - 1, Some(letter));
        true
    }

    /// Remove the last typed letter
    ///
    /// Returns whether a letter was removed.
    pub fn delete_letter(&mut self) -> bool {
        if self.status.is_over() || self.current_guess.pop().is_none() {
            return false;
        }

        self.board
            .row_mut(self.current_row)
            .set_letter(self.current_guess.len(), None);
        true
    }

    /// Submit the current row
    ///
    /// The guess must be complete and in the word list; only then is it
    /// evaluated and written to the board. A rejection sets the transient
    /// message and changes nothing else.
    ///
    /// # Errors
    ///
    /// Returns `GuessError::IncompleteGuess` if fewer than five letters are
    /// typed, or `GuessError::NotInWordList` if the word is unknown.
    pub fn submit_guess(&mut self) -> Result<SubmitOutcome, GuessError> {
        self.message = None;

        if self.status.is_over() {
            return Ok(SubmitOutcome::Ignored);
        }

        let result = self.evaluate_current();
        if let Err(e) = &result {
            debug!("rejected guess '{}': {e}", self.current_guess);
            self.message = Some(e.to_string());
        }
        result
    }

    fn evaluate_current(&mut self) -> Result<SubmitOutcome, GuessError> {
        if self.current_guess.len() != WORD_LENGTH {
            return Err(GuessError::IncompleteGuess);
        }

        let guess = Word::new(&self.current_guess).map_err(|_| GuessError::IncompleteGuess)?;
        if !self.words.contains(&guess) {
            return Err(GuessError::NotInWordList(guess.to_string()));
        }

        let verdicts = evaluate(&guess, &self.target);
        self.board.row_mut(self.current_row).apply(&guess, verdicts);
        debug!("row {}: {guess} accepted", self.current_row + 1);

        if guess == self.target {
            self.status = GameStatus::Won;
            info!("won in {} guesses", self.current_row + 1);
            return Ok(SubmitOutcome::Won);
        }

        self.current_row += 1;
        self.current_guess.clear();

        if self.current_row == MAX_GUESSES {
            self.status = GameStatus::Lost;
            info!("lost, the word was {}", self.target);
            return Ok(SubmitOutcome::Lost);
        }

        Ok(SubmitOutcome::NextRow)
    }

    /// Replace the session with a fresh one
    ///
    /// Board, row, guess, status and message reset together. The new target
    /// avoids repeating the previous one when the list allows it. Any pending
    /// "new game" notice is cancelled and a fresh one armed.
    pub fn start_new_game(&mut self) {
        let target = self.words.pick(&mut self.rng, Some(&self.target));
        trace!("target selected: {target}");

        self.new_game_notice.cancel();

        self.target = target;
        self.board = Board::default();
        self.current_row = 0;
        self.current_guess.clear();
        self.status = GameStatus::InProgress;
        self.message = None;

        self.new_game_notice.arm(Instant::now(), NEW_GAME_NOTICE);
        info!("new game started");
    }
}

impl<R> Game<R> {
    /// Advance deferred state to `now`
    ///
    /// Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.new_game_notice.expire(now)
    }

    /// The secret word; for debug display only
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Index of the row being typed, `MAX_GUESSES` once every row is used
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Transient message for the player, e.g. "Not in word list"
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the current guess has all five letters
    #[must_use]
    pub fn is_guess_full(&self) -> bool {
        self.current_guess.len() == WORD_LENGTH
    }

    /// Whether a game was just started and the notice has not expired
    #[must_use]
    pub const fn is_new_game(&self) -> bool {
        self.new_game_notice.is_pending()
    }

    /// Time until the next deferred change, if any is scheduled
    #[must_use]
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.new_game_notice.remaining(now)
    }

    #[must_use]
    pub const fn word_list(&self) -> &WordList {
        &self.words
    }
}
