use super::state::Outcome;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Game already {outcome}, no further guesses are accepted")]
    InvalidTransition { outcome: Outcome },
}

pub type Result<T> = core::result::Result<T, GameError>;
