//! TUI application state and logic

use crate::session::{KeyInput, KeyOutcome, SaveStore, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, 's> {
    pub session: Session<'a>,
    store: &'s mut dyn SaveStore,
    pub message: Option<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, 's> App<'a, 's> {
    #[must_use]
    pub fn new(session: Session<'a>, store: &'s mut dyn SaveStore) -> Self {
        let mut app = Self {
            session,
            store,
            message: None,
            should_quit: false,
        };
        app.show_status();
        app
    }

    /// Handle one terminal key event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let input = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char(c) => KeyInput::Letter(c),
            KeyCode::Backspace => KeyInput::Backspace,
            KeyCode::Enter => KeyInput::Enter,
            _ => return,
        };

        self.apply(input);
    }

    /// Apply a key to the session, persist, and update the message line
    pub fn apply(&mut self, input: KeyInput) {
        let outcome = self.session.handle_key(input);

        if outcome.changed_state() {
            if let Err(e) = self.store.save(&self.session.snapshot()) {
                warn!("Failed to save game: {e}");
                self.set_message(format!("Could not save progress: {e}"), MessageStyle::Error);
                return;
            }
        }

        match outcome {
            KeyOutcome::Edited => self.message = None,
            KeyOutcome::Incomplete => {
                self.set_message("Not enough letters".to_string(), MessageStyle::Error);
            }
            KeyOutcome::Rejected(e) => self.set_message(e.to_string(), MessageStyle::Error),
            KeyOutcome::Submitted(_) => self.show_status(),
            KeyOutcome::Ignored => {}
        }
    }

    fn show_status(&mut self) {
        self.message = self.session.status_message().map(|text| Message {
            text,
            style: if self.session.state().outcome() == crate::core::Outcome::Won {
                MessageStyle::Success
            } else {
                MessageStyle::Info
            },
        });
    }

    fn set_message(&mut self, text: String, style: MessageStyle) {
        self.message = Some(Message { text, style });
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key_event(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, Word};
    use crate::session::MemoryStore;
    use crate::wordlists::Dictionary;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_a_word_submits_and_saves() {
        let dictionary = Dictionary::embedded();
        let mut store = MemoryStore::new();
        let session = Session::new(&dictionary, Word::new("point").unwrap());
        let mut app = App::new(session, &mut store);

        type_word(&mut app, "crane");
        assert_eq!(app.session.state().attempts_used(), 1);
        assert_eq!(app.message, None);
        drop(app);

        assert_eq!(store.load().unwrap().unwrap().grid, ["CRANE"]);
    }

    #[test]
    fn short_row_shows_error() {
        let dictionary = Dictionary::embedded();
        let mut store = MemoryStore::new();
        let session = Session::new(&dictionary, Word::new("point").unwrap());
        let mut app = App::new(session, &mut store);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);

        let message = app.message.clone().unwrap();
        assert_eq!(message.style, MessageStyle::Error);
        assert_eq!(message.text, "Not enough letters");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.message, None);
    }

    #[test]
    fn unknown_word_shows_error() {
        let dictionary = Dictionary::embedded();
        let mut store = MemoryStore::new();
        let session = Session::new(&dictionary, Word::new("point").unwrap());
        let mut app = App::new(session, &mut store);

        type_word(&mut app, "xqzzy");
        assert_eq!(
            app.message.as_ref().map(|m| m.text.as_str()),
            Some("XQZZY is not in the word list")
        );
        assert_eq!(app.session.state().attempts_used(), 0);
    }

    #[test]
    fn win_shows_status() {
        let dictionary = Dictionary::embedded();
        let mut store = MemoryStore::new();
        let session = Session::new(&dictionary, Word::new("point").unwrap());
        let mut app = App::new(session, &mut store);

        type_word(&mut app, "point");

        assert_eq!(app.session.state().outcome(), Outcome::Won);
        let message = app.message.clone().unwrap();
        assert_eq!(message.style, MessageStyle::Success);
        assert_eq!(
            message.text,
            "Congrats! You guessed the word POINT in 1 try."
        );

        // Further keys do nothing
        type_word(&mut app, "crane");
        assert_eq!(app.session.state().attempts_used(), 1);
    }

    #[test]
    fn quit_keys() {
        let dictionary = Dictionary::embedded();
        let mut store = MemoryStore::new();
        let session = Session::new(&dictionary, Word::new("point").unwrap());
        let mut app = App::new(session, &mut store);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        app.should_quit = false;
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn resumed_finished_game_shows_status() {
        let dictionary = Dictionary::embedded();
        let mut store = MemoryStore::new();
        let mut session = Session::new(&dictionary, Word::new("point").unwrap());
        for _ in 0..6 {
            session.submit("crane").unwrap();
        }

        let app = App::new(session, &mut store);
        let message = app.message.unwrap();
        assert_eq!(message.style, MessageStyle::Info);
        assert!(message.text.starts_with("The correct word is POINT"));
    }
}
