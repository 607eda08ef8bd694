//! Formatting utilities for terminal output

use crate::core::{Verdict, to_emoji};
use crate::game::{Board, Cell, Row};
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashMap;

/// Keyboard rows in QWERTY order
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format one grid cell as a coloured tile
#[must_use]
pub fn tile(cell: &Cell) -> ColoredString {
    let text = format!(" {} ", cell.letter.unwrap_or('·'));
    match cell.verdict {
        Some(Verdict::Correct) => text.black().on_green().bold(),
        Some(Verdict::Present) => text.black().on_yellow().bold(),
        Some(Verdict::Absent) => text.white().on_bright_black().bold(),
        None if cell.letter.is_some() => text.bright_white().bold(),
        None => text.bright_black(),
    }
}

/// Format a row as a line of coloured tiles
#[must_use]
pub fn row_tiles(row: &Row) -> String {
    row.cells()
        .iter()
        .map(|cell| tile(cell).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the keyboard, colouring letters by what is known about them
#[must_use]
pub fn keyboard(states: &FxHashMap<char, Verdict>) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|letter| {
                    let cell = Cell {
                        letter: Some(letter),
                        verdict: states.get(&letter).copied(),
                    };
                    tile(&cell).to_string()
                })
                .collect::<String>()
        })
        .collect()
}

/// Emoji summary of every submitted row, one row per line
///
/// # Examples
/// ```
/// use wordle_week::game::Board;
/// use wordle_week::output::formatters::share_grid;
///
/// assert_eq!(share_grid(&Board::default()), "");
/// ```
#[must_use]
pub fn share_grid(board: &Board) -> String {
    board
        .rows()
        .iter()
        .filter_map(Row::verdicts)
        .map(|verdicts| to_emoji(&verdicts))
        .collect::<Vec<_>>()
        .join("\n")
}
