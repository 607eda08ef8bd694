//! Display functions for the line-based front end

use super::formatters::{keyboard, row_tiles, share_grid};
use crate::commands::Evaluation;
use crate::core::to_emoji;
use crate::game::{Game, GameStatus};
use colored::Colorize;
use std::io::{self, Write};

/// Print the board, keyboard and any pending message
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_board<R, W: Write>(out: &mut W, game: &Game<R>, reveal: bool) -> io::Result<()> {
    writeln!(out)?;
    if reveal {
        writeln!(out, "  {}", format!("Target: {}", game.target()).bright_black())?;
    }
    for row in game.board().rows() {
        writeln!(out, "  {}", row_tiles(row))?;
    }

    writeln!(out)?;
    for line in keyboard(&game.board().letter_states()) {
        writeln!(out, "  {line}")?;
    }

    if let Some(message) = game.message() {
        writeln!(out, "\n  {}", message.red().bold())?;
    }
    writeln!(out)
}

/// Print the end-of-game banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_outcome<R, W: Write>(out: &mut W, game: &Game<R>) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    match game.status() {
        GameStatus::Won => {
            let guesses = game.current_row() + 1;
            writeln!(
                out,
                "{}",
                format!(
                    "🎉 Excellent! Solved in {guesses} {}",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            )?;
        }
        GameStatus::Lost => {
            writeln!(out, "{}", "Game Over".bright_black().bold())?;
            writeln!(
                out,
                "The word was: {}",
                game.target().to_string().bright_yellow().bold()
            )?;
        }
        GameStatus::InProgress => {}
    }
    writeln!(out, "\n{}", share_grid(game.board()))?;
    writeln!(out, "{}", "═".repeat(40).bright_cyan())
}

/// Print the result of evaluating one word against another
pub fn print_evaluation(result: &Evaluation) {
    println!(
        "{} → {}  {}",
        result.guess.to_string().bright_white().bold(),
        result.target.to_string().bright_yellow().bold(),
        to_emoji(&result.verdicts)
    );
}
