//! WordleWeek - CLI
//!
//! Wordle in the terminal, with a full-screen TUI and a line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::{Env, Target};
use log::debug;
use std::fs::File;
use std::path::{Path, PathBuf};
use wordle_week::{
    commands::{evaluate_words, run_simple},
    game::Game,
    interactive::{App, run_tui},
    output::print_evaluation,
    wordlists::WordList,
};

#[derive(Debug, Parser)]
#[command(
    name = "wordle_week",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (one word per line); defaults to the built-in list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for target selection, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show the target word (debug)
    #[arg(long, global = true)]
    reveal: bool,

    /// Write logs to this file instead of stderr (level from RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode
    Simple,

    /// Show the feedback a guess would get against a target
    Evaluate {
        /// The guessed word
        guess: String,

        /// The secret word
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;
    debug!("command line options: {cli:?}");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Evaluate { guess, target } => {
            let result = evaluate_words(&guess, &target)?;
            print_evaluation(&result);
            Ok(())
        }
        Commands::Play => {
            let mut game = new_game(cli.wordlist.as_deref(), cli.seed)?;
            run_tui(App::new(&mut game, cli.reveal))
        }
        Commands::Simple => {
            let mut game = new_game(cli.wordlist.as_deref(), cli.seed)?;
            run_simple(&mut game, cli.reveal)
        }
    }
}

/// Route `log` output through `env_logger`, defaulting to warnings only
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Load the word list and start a session
fn new_game(wordlist: Option<&Path>, seed: Option<u64>) -> Result<Game> {
    let words = match wordlist {
        Some(path) => WordList::from_file(path)?,
        None => WordList::embedded()?,
    };
    debug!("word list has {} words", words.len());

    Ok(match seed {
        Some(seed) => Game::seeded(words, seed),
        None => Game::new(words),
    })
}
