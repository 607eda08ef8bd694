//! The six-row guess grid

use crate::core::{Verdict, Verdicts, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Number of guesses per game
pub const MAX_GUESSES: usize = 6;

/// One tile of the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub verdict: Option<Verdict>,
}

impl Cell {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none() && self.verdict.is_none()
    }
}

/// One guess slot: letters while typing, letters and verdicts once submitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Row {
    cells: [Cell; WORD_LENGTH],
}

impl Row {
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// A row is submitted once every cell carries a verdict
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.cells.iter().all(|c| c.verdict.is_some())
    }

    /// Verdicts of a submitted row
    #[must_use]
    pub fn verdicts(&self) -> Option<Verdicts> {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        for (slot, cell) in verdicts.iter_mut().zip(&self.cells) {
            *slot = cell.verdict?;
        }
        Some(verdicts)
    }

    /// Letters typed into the row so far
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.iter().filter_map(|c| c.letter).collect()
    }

    pub(crate) fn set_letter(&mut self, column: usize, letter: Option<char>) {
        self.cells[column].letter = letter;
    }

    pub(crate) fn apply(&mut self, guess: &Word, verdicts: Verdicts) {
        for ((cell, &letter), verdict) in self.cells.iter_mut().zip(guess.letters()).zip(verdicts) {
            cell.letter = Some(char::from(letter));
            cell.verdict = Some(verdict);
        }
    }
}

/// Fixed-capacity grid of guesses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    rows: [Row; MAX_GUESSES],
}

impl Board {
    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_GUESSES] {
        &self.rows
    }

    /// # Panics
    /// Panics if `index >= MAX_GUESSES`
    #[must_use]
    pub const fn row(&self, index: usize) -> &Row {
        &self.rows[index]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Row::is_empty)
    }

    /// Best verdict seen so far for every guessed letter
    ///
    /// Correct beats Present beats Absent. Used to colour an on-screen keyboard.
    #[must_use]
    pub fn letter_states(&self) -> FxHashMap<char, Verdict> {
        let mut states: FxHashMap<char, Verdict> = FxHashMap::default();
        let cells = self.rows.iter().flat_map(|row| row.cells.iter());

        for cell in cells {
            if let (Some(letter), Some(verdict)) = (cell.letter, cell.verdict) {
                states
                    .entry(letter)
                    .and_modify(|best| *best = (*best).max(verdict))
                    .or_insert(verdict);
            }
        }

        states
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> &mut Row {
        &mut self.rows[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;
    use Verdict::{Absent, Correct, Present};

    fn submitted(guess: &str, target: &str) -> Row {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        let mut row = Row::default();
        row.apply(&guess, evaluate(&guess, &target));
        row
    }

    #[test]
    fn default_board_is_empty() {
        let board = Board::default();
        assert!(board.is_empty());
        assert_eq!(board.rows().len(), MAX_GUESSES);
        assert!(board.letter_states().is_empty());
    }

    #[test]
    fn typed_letters_have_no_verdicts() {
        let mut row = Row::default();
        row.set_letter(0, Some('A'));
        row.set_letter(1, Some('P'));

        assert_eq!(row.text(), "AP");
        assert!(!row.is_empty());
        assert!(!row.is_submitted());
        assert_eq!(row.verdicts(), None);

        row.set_letter(1, None);
        assert_eq!(row.text(), "A");
    }

    #[test]
    fn applied_row_is_submitted() {
        let row = submitted("SPEED", "SPELL");
        assert!(row.is_submitted());
        assert_eq!(row.text(), "SPEED");
        assert_eq!(
            row.verdicts(),
            Some([Correct, Correct, Correct, Absent, Absent])
        );
    }

    #[test]
    fn letter_states_keep_best_verdict() {
        let mut board = Board::default();
        // E is present in the first row and correct in the second
        *board.row_mut(0) = submitted("EAGLE", "SWEET");
        *board.row_mut(1) = submitted("SPEED", "SWEET");

        let states = board.letter_states();
        assert_eq!(states.get(&'E'), Some(&Correct));
        assert_eq!(states.get(&'S'), Some(&Correct));
        assert_eq!(states.get(&'A'), Some(&Absent));
        assert_eq!(states.get(&'D'), Some(&Absent));
        assert_eq!(states.get(&'Z'), None);
    }

    #[test]
    fn letter_states_ignore_unsubmitted_letters() {
        let mut board = Board::default();
        *board.row_mut(0) = submitted("CHAIR", "RADIO");
        board.row_mut(1).set_letter(0, Some('Q'));

        let states = board.letter_states();
        assert_eq!(states.get(&'R'), Some(&Present));
        assert_eq!(states.get(&'Q'), None);
    }
}
