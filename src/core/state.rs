//! Game state and its transitions

use super::error::{GameError, Result};
use super::feedback::Evaluation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Outcome of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// Progress of one game session
///
/// `attempts_used` never exceeds `max_attempts`, and once `outcome` is
/// `Won` or `Lost` no further transition is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    attempts_used: usize,
    max_attempts: usize,
    outcome: Outcome,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game with no attempts used
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attempts_used: 0,
            max_attempts: MAX_ATTEMPTS,
            outcome: Outcome::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts_used)
    }

    /// Apply an evaluated guess and return the next state
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidTransition` if the game has already ended.
    ///
    /// # Examples
    /// ```
    /// use wordle_grid::core::{GameState, Outcome, Word, evaluate_guess};
    ///
    /// let secret = Word::new("point").unwrap();
    /// let guess = Word::new("point").unwrap();
    ///
    /// let state = GameState::new()
    ///     .submit_guess(&evaluate_guess(&secret, &guess))
    ///     .unwrap();
    /// assert_eq!(state.outcome(), Outcome::Won);
    /// assert_eq!(state.attempts_used(), 1);
    /// ```
    pub fn submit_guess(self, evaluation: &Evaluation) -> Result<Self> {
        if self.outcome.is_finished() {
            return Err(GameError::InvalidTransition {
                outcome: self.outcome,
            });
        }

        let attempts_used = self.attempts_used + 1;
        let outcome = if evaluation.is_winning_guess() {
            Outcome::Won
        } else if attempts_used >= self.max_attempts {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        Ok(Self {
            attempts_used,
            outcome,
            ..self
        })
    }
}
