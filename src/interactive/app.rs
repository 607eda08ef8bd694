//! TUI application state and event loop

use crate::game::Game;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for input when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
///
/// The game is borrowed, not owned: the TUI only drives it.
pub struct App<'g, R> {
    pub game: &'g mut Game<R>,
    /// Show the target word (debug)
    pub reveal: bool,
    pub should_quit: bool,
}

impl<'g, R: Rng> App<'g, R> {
    #[must_use]
    pub const fn new(game: &'g mut Game<R>, reveal: bool) -> Self {
        Self {
            game,
            reveal,
            should_quit: false,
        }
    }

    /// Apply one key press to the game
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.game.start_new_game(),
            KeyCode::Esc => self.should_quit = true,
            // Once the game is over letters are free to act as commands
            KeyCode::Char('q' | 'Q') if self.game.is_over() => self.should_quit = true,
            KeyCode::Char('n' | 'N') if self.game.is_over() => self.game.start_new_game(),
            KeyCode::Char(c) if !ctrl => {
                self.game.add_letter(c);
            }
            KeyCode::Backspace => {
                self.game.delete_letter();
            }
            KeyCode::Enter => {
                if let Ok(outcome) = self.game.submit_guess() {
                    debug!("submit: {outcome:?}");
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(mut app: App<'_, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        // Wake up in time to clear any pending notice
        let timeout = app
            .game
            .next_deadline(Instant::now())
            .map_or(IDLE_POLL, |remaining| remaining.min(IDLE_POLL));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        app.game.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
