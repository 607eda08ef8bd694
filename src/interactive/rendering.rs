//! TUI rendering with ratatui
//!
//! Board, keyboard and status line for the game screen.

use super::app::App;
use crate::core::Verdict;
use crate::game::{Cell, GameStatus};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use rustc_hash::FxHashMap;

/// Main UI rendering function
pub fn ui<R>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(3),  // Notices
            Constraint::Length(14), // Board
            Constraint::Length(3),  // Message
            Constraint::Length(5),  // Keyboard
            Constraint::Min(1),     // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_notices(f, app, chunks[1]);
    render_board(f, app, chunks[2]);
    render_message(f, app, chunks[3]);
    render_keyboard(f, app, chunks[4]);
    render_help(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_notices<R>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let mut lines = Vec::new();

    if app.reveal {
        lines.push(Line::from(Span::styled(
            format!("Target: {}", app.game.target()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if app.game.is_new_game() {
        lines.push(Line::from(Span::styled(
            "New game started!",
            Style::default().fg(Color::Green),
        )));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn tile_style(cell: &Cell) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match cell.verdict {
        Some(Verdict::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(Verdict::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(Verdict::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None if cell.letter.is_some() => base.fg(Color::White),
        None => Style::default().fg(Color::DarkGray),
    }
}

fn render_board<R>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let mut lines = Vec::new();

    for row in app.game.board().rows() {
        let spans: Vec<Span> = row
            .cells()
            .iter()
            .flat_map(|cell| {
                let letter = cell.letter.unwrap_or('·');
                [
                    Span::styled(format!(" {letter} "), tile_style(cell)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_message<R>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let (text, style) = match (app.game.status(), app.game.message()) {
        (GameStatus::Won, _) => (
            match app.game.current_row() + 1 {
                1 => "🎉 Excellent! You guessed it in one! 🎉".to_string(),
                n => format!("🎉 Excellent! You guessed it in {n} tries 🎉"),
            },
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        (GameStatus::Lost, _) => (
            format!("Game Over. The word was: {}", app.game.target()),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        ),
        (GameStatus::InProgress, Some(message)) => {
            (message.to_string(), Style::default().fg(Color::Red))
        }
        (GameStatus::InProgress, None) => (String::new(), Style::default()),
    };

    let message = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(message, area);
}

fn key_style(letter: char, states: &FxHashMap<char, Verdict>) -> Style {
    let cell = Cell {
        letter: Some(letter),
        verdict: states.get(&letter).copied(),
    };
    tile_style(&cell)
}

fn render_keyboard<R>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let states = app.game.board().letter_states();

    let mut lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| Span::styled(format!(" {letter} "), key_style(letter, &states)))
                .collect();
            Line::from(spans)
        })
        .collect();

    // Submit is only live with a full row
    let enter_style = if app.game.is_guess_full() && !app.game.is_over() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::from(vec![
        Span::styled(" ENTER ", enter_style),
        Span::raw("   "),
        Span::styled(" DEL ", Style::default().fg(Color::LightRed)),
    ]));

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(keyboard, area);
}

fn render_help<R>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let help_text = if app.game.is_over() {
        "n: New Game | q: Quit"
    } else {
        "Type to guess | Enter: Submit | Backspace: Delete | Ctrl-N: New Game | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::wordlists::WordList;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen<R>(app: &App<'_, R>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 32)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_header_and_keyboard() {
        let mut game = Game::seeded(WordList::embedded().unwrap(), 2);
        let app = App::new(&mut game, false);
        let text = screen(&app);

        assert!(text.contains("W O R D L E"));
        assert!(text.contains("ENTER"));
        assert!(!text.contains("Target:"));
    }

    #[test]
    fn renders_rejection_message() {
        let mut game = Game::seeded(WordList::embedded().unwrap(), 2);
        for c in "XYZZY".chars() {
            game.add_letter(c);
        }
        assert!(game.submit_guess().is_err());

        let app = App::new(&mut game, false);
        assert!(screen(&app).contains("Not in word list"));
    }

    #[test]
    fn reveal_shows_target() {
        let mut game = Game::seeded(WordList::embedded().unwrap(), 2);
        let target = game.target().to_string();
        let app = App::new(&mut game, true);

        assert!(screen(&app).contains(&format!("Target: {target}")));
    }

    #[test]
    fn loss_shows_answer() {
        let mut game = Game::seeded(WordList::embedded().unwrap(), 2);
        let target = game.target().to_string();
        let misses: Vec<String> = game
            .word_list()
            .iter()
            .filter(|w| *w != game.target())
            .take(crate::game::MAX_GUESSES)
            .map(ToString::to_string)
            .collect();
        for miss in misses {
            for c in miss.chars() {
                game.add_letter(c);
            }
            game.submit_guess().unwrap();
        }

        let app = App::new(&mut game, false);
        let text = screen(&app);
        assert!(text.contains(&format!("The word was: {target}")));
        assert!(text.contains("n: New Game"));
    }
}
