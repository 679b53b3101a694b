//! Game session
//!
//! A session owns everything one game needs: the secret word, the
//! `GameState`, and the board of typed letters. Input arrives as discrete
//! keys or as whole words; each accepted guess runs one
//! evaluate-and-transition cycle to completion. Persistence is left to the
//! caller through `snapshot` and `resume`.

pub mod board;
pub mod daily;
pub mod storage;

pub use board::{Board, Row};
pub use daily::WordHistory;
pub use storage::{FileStore, MemoryStore, SaveData, SaveStore, StorageError};

use crate::core::{
    Evaluation, GameError, GameState, Outcome, Word, WordError, evaluate_guess, status_message,
};
use crate::wordlists::Dictionary;
use log::{debug, info, warn};
use thiserror::Error;

/// Why a guess was not accepted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error(transparent)]
    Malformed(#[from] WordError),
    #[error("{0} is not in the word list")]
    NotInDictionary(Word),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Letter(char),
    Backspace,
    Enter,
}

/// What a key did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The board changed (letter added or removed)
    Edited,
    /// Nothing happened: row full or empty, non-letter, or game over
    Ignored,
    /// Enter on a row that is not full yet
    Incomplete,
    /// Enter on a full row that was rejected; the row stays editable
    Rejected(GuessError),
    /// Enter on a full row that was accepted
    Submitted(Evaluation),
}

impl KeyOutcome {
    /// Whether the session changed and should be persisted
    #[must_use]
    pub const fn changed_state(&self) -> bool {
        matches!(self, Self::Edited | Self::Submitted(_))
    }
}

/// One game from secret-word assignment to terminal outcome
#[derive(Debug, Clone)]
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    secret: Word,
    state: GameState,
    board: Board,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, secret: Word) -> Self {
        debug!("Starting new session");
        Self {
            dictionary,
            secret,
            state: GameState::new(),
            board: Board::new(),
        }
    }

    /// Start a session, restoring `saved` when it belongs to the same secret
    ///
    /// Saves for another secret word, or saves whose rows do not replay to
    /// the recorded attempts and outcome, are discarded.
    #[must_use]
    pub fn resume(dictionary: &'a Dictionary, secret: Word, saved: Option<&SaveData>) -> Self {
        let Some(saved) = saved else {
            return Self::new(dictionary, secret);
        };

        if saved.secret_word != secret.text() {
            info!("Secret word changed, discarding saved game");
            return Self::new(dictionary, secret);
        }

        match Self::replay(dictionary, secret.clone(), saved) {
            Ok(session) => {
                info!(
                    "Restored saved game: {} attempts, {}",
                    session.state.attempts_used(),
                    session.state.outcome()
                );
                session
            }
            Err(reason) => {
                warn!("Discarding inconsistent saved game: {reason}");
                Self::new(dictionary, secret)
            }
        }
    }

    fn replay(dictionary: &'a Dictionary, secret: Word, saved: &SaveData) -> Result<Self, String> {
        let mut session = Self::new(dictionary, secret);

        if saved.grid.len() > session.board.rows().len() {
            return Err(format!("{} rows in grid", saved.grid.len()));
        }
        // Submitted rows plus at most one row being typed
        if saved.grid.len() > saved.attempts_used + 1 {
            return Err(format!(
                "{} rows in grid for {} attempts",
                saved.grid.len(),
                saved.attempts_used
            ));
        }

        for row in saved.grid.iter().take(saved.attempts_used) {
            let guess = Word::new(row).map_err(|e| format!("row {row:?}: {e}"))?;
            if !dictionary.contains(&guess) {
                return Err(format!("row {row:?} is not in the word list"));
            }
            session
                .accept(&guess)
                .map_err(|e| format!("row {row:?}: {e}"))?;
        }

        if session.state.attempts_used() != saved.attempts_used
            || session.state.outcome() != saved.outcome
        {
            return Err(format!(
                "replayed {} attempts ({}), saved {} ({})",
                session.state.attempts_used(),
                session.state.outcome(),
                saved.attempts_used,
                saved.outcome
            ));
        }

        if let Some(pending) = saved.grid.get(saved.attempts_used) {
            if session.state.is_finished() && !pending.is_empty() {
                return Err("letters typed after the game ended".to_string());
            }
            for letter in pending.chars() {
                if !session.board.push_letter(letter) {
                    return Err(format!("unexpected letter {letter:?} in current row"));
                }
            }
        }

        Ok(session)
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Outcome message, `None` while the game is in progress
    #[must_use]
    pub fn status_message(&self) -> Option<String> {
        status_message(&self.state, &self.secret)
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyInput) -> KeyOutcome {
        if self.state.is_finished() {
            return KeyOutcome::Ignored;
        }

        match key {
            KeyInput::Letter(letter) => {
                if self.board.push_letter(letter) {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            KeyInput::Backspace => {
                if self.board.pop_letter() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            KeyInput::Enter => match self.board.current_row() {
                Some(row) if row.is_full() => {
                    let text = row.text();
                    match self.submit(&text) {
                        Ok(evaluation) => KeyOutcome::Submitted(evaluation),
                        Err(e) => KeyOutcome::Rejected(e),
                    }
                }
                Some(_) => KeyOutcome::Incomplete,
                None => KeyOutcome::Ignored,
            },
        }
    }

    /// Submit a whole word as the next guess
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if the text is not a 5-letter word, is not in
    /// the dictionary, or the game is already over. A rejected guess does
    /// not use an attempt.
    pub fn submit(&mut self, text: &str) -> Result<Evaluation, GuessError> {
        let result = Word::new(text).map_err(GuessError::from).and_then(|guess| {
            if self.dictionary.contains(&guess) {
                self.accept(&guess)
            } else {
                Err(GuessError::NotInDictionary(guess))
            }
        });

        match &result {
            Ok(evaluation) => debug!(
                "Accepted guess {}/{}: {}",
                self.state.attempts_used(),
                self.state.max_attempts(),
                evaluation.to_emoji()
            ),
            Err(e) => debug!("Rejected guess {text:?}: {e}"),
        }

        result
    }

    /// Evaluate, transition, and record a guess; skips the dictionary check
    fn accept(&mut self, guess: &Word) -> Result<Evaluation, GuessError> {
        let evaluation = evaluate_guess(&self.secret, guess);
        self.state = self.state.submit_guess(&evaluation)?;
        self.board.commit(guess, evaluation);

        if self.state.outcome() != Outcome::InProgress {
            info!(
                "Game {} after {} attempts",
                self.state.outcome(),
                self.state.attempts_used()
            );
        }

        Ok(evaluation)
    }

    /// Record to persist
    #[must_use]
    pub fn snapshot(&self) -> SaveData {
        let mut grid = self.board.grid_letters();
        while grid.last().is_some_and(String::is_empty) {
            grid.pop();
        }

        SaveData {
            secret_word: self.secret.text().to_string(),
            attempts_used: self.state.attempts_used(),
            outcome: self.state.outcome(),
            grid,
        }
    }
}
