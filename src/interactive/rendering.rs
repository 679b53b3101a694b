//! TUI rendering with ratatui
//!
//! Board grid, status line, and key help for the game interface.

use super::app::{App, MessageStyle};
use crate::core::{LetterFeedback, WORD_LENGTH};
use crate::session::Row;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_message(f, app, chunks[2]);
    render_help(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.session.board();
    let current = (!app.session.is_finished()).then(|| board.current_index());

    let mut lines = vec![Line::from("")];
    for (index, row) in board.rows().iter().enumerate() {
        lines.push(board_line(row, current == Some(index)));
        lines.push(Line::from(""));
    }

    let attempts = format!(
        " Attempt {}/{} ",
        app.session
            .state()
            .attempts_used()
            .min(app.session.state().max_attempts()),
        app.session.state().max_attempts()
    );

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(attempts)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

/// One grid row: five tiles separated by a space
fn board_line(row: &Row, is_current: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

    for position in 0..WORD_LENGTH {
        if position > 0 {
            spans.push(Span::raw(" "));
        }

        let letter = row.letters().get(position).copied();
        let feedback = row.evaluation().map(|e| e.feedback()[position]);
        spans.push(tile(letter, feedback, is_current));
    }

    Line::from(spans)
}

fn tile(letter: Option<char>, feedback: Option<LetterFeedback>, is_current: bool) -> Span<'static> {
    let text = format!(" {} ", letter.unwrap_or('·'));

    let style = match feedback {
        Some(LetterFeedback::CorrectPlace) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(LetterFeedback::WrongPlace) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(LetterFeedback::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None if is_current && letter.is_some() => Style::default().fg(Color::White),
        None if is_current => Style::default().fg(Color::Gray),
        None => Style::default().fg(Color::DarkGray),
    };

    Span::styled(text, style.add_modifier(Modifier::BOLD))
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match &app.message {
        Some(message) => {
            let color = match message.style {
                MessageStyle::Info => Color::White,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            (message.text.as_str(), color)
        }
        None => ("", Color::White),
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.session.is_finished() {
        "Esc: Quit"
    } else {
        "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
