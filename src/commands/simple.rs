//! Simple line-based mode
//!
//! Text-based game without the TUI: one guess per line.

use crate::core::WORD_LENGTH;
use crate::game::Game;
use crate::output::{print_board, print_outcome};
use anyhow::Result;
use colored::Colorize;
use log::debug;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the line-based mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng>(game: &mut Game<R>, reveal: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(game, reveal, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the line-based mode over arbitrary input and output
///
/// Returns when the player quits or input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: Rng, I: BufRead, W: Write>(
    game: &mut Game<R>,
    reveal: bool,
    input: &mut I,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n╔════════════════════════════════════════╗")?;
    writeln!(out, "║             W O R D L E                ║")?;
    writeln!(out, "╚════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the five-letter word in six tries.")?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit\n")?;

    print_board(out, game, reveal)?;

    loop {
        let Some(line) = prompt(input, out, "Guess")? else {
            return Ok(());
        };

        match line.as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                game.start_new_game();
                writeln!(out, "\n🔄 {}", "New game started!".green())?;
                print_board(out, game, reveal)?;
                continue;
            }
            _ => {}
        }

        if line.chars().count() > WORD_LENGTH {
            writeln!(out, "{}", "Too many letters".red().bold())?;
            continue;
        }

        // Retype the row from scratch so a rejected guess never lingers
        while game.delete_letter() {}
        for letter in line.chars() {
            if !game.add_letter(letter) {
                debug!("ignored input character {letter:?}");
            }
        }

        // Rejections are recorded as the game's message and printed with the board
        let _ = game.submit_guess();
        print_board(out, game, reveal)?;

        if game.is_over() {
            print_outcome(out, game)?;

            let again = prompt(input, out, "Play again? (yes/no)")?;
            if matches!(again.as_deref(), Some("yes" | "y")) {
                game.start_new_game();
                writeln!(out, "\n🔄 {}", "New game started!".green())?;
                print_board(out, game, reveal)?;
            } else {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
        }
    }
}

/// Read one trimmed line, or None at end of input
fn prompt<I: BufRead, W: Write>(input: &mut I, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, MAX_GUESSES};
    use crate::wordlists::WordList;
    use std::io::Cursor;

    fn game() -> Game {
        Game::seeded(WordList::embedded().unwrap(), 5)
    }

    fn run(game: &mut Game, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run_simple_with(game, false, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn quits_on_command() {
        let mut game = game();
        let out = run(&mut game, "quit\n");
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn stops_at_end_of_input() {
        let mut game = game();
        run(&mut game, "");
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn unknown_word_is_reported_and_not_counted() {
        let mut game = game();
        let out = run(&mut game, "xyzzy\n");

        assert!(out.contains("Not in word list"));
        assert_eq!(game.current_row(), 0);
    }

    #[test]
    fn short_guess_is_reported() {
        let mut game = game();
        let out = run(&mut game, "abc\n");
        assert!(out.contains("Not enough letters"));
    }

    #[test]
    fn long_guess_is_rejected_before_typing() {
        let mut game = game();
        let out = run(&mut game, "abcdefg\n");
        assert!(out.contains("Too many letters"));
        assert_eq!(game.current_guess(), "");
    }

    #[test]
    fn winning_line_ends_game_and_declines_replay() {
        let mut game = game();
        let target = game.target().to_string();
        let out = run(&mut game, &format!("{target}\nno\n"));

        assert_eq!(game.status(), GameStatus::Won);
        assert!(out.contains("Excellent"));
        assert!(out.contains("🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn losing_reveals_target_and_replay_resets() {
        let mut game = game();
        let target = game.target().to_string();
        let misses: Vec<String> = game
            .word_list()
            .iter()
            .filter(|w| *w != game.target())
            .take(MAX_GUESSES)
            .map(ToString::to_string)
            .collect();

        let script = format!("{}\nyes\nquit\n", misses.join("\n"));
        let out = run(&mut game, &script);

        assert!(out.contains("Game Over"));
        assert!(out.contains(&target));
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.board().is_empty());
    }

    #[test]
    fn new_command_resets_board() {
        let mut game = game();
        let miss = game
            .word_list()
            .iter()
            .find(|w| *w != game.target())
            .unwrap()
            .to_string();

        run(&mut game, &format!("{miss}\nnew\n"));

        assert_eq!(game.current_row(), 0);
        assert!(game.board().is_empty());
    }
}
