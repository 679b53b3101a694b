//! Core game logic
//!
//! Pure types and functions: words, guess evaluation, state transitions and
//! outcome messages. Nothing here performs I/O.

mod error;
mod feedback;
mod state;
mod status;
mod word;

pub use error::GameError;
pub use feedback::{Evaluation, LetterFeedback, evaluate_guess};
pub use state::{GameState, MAX_ATTEMPTS, Outcome};
pub use status::status_message;
pub use word::{WORD_LENGTH, Word, WordError};
