//! Wordle Grid
//!
//! A word-guessing game: find the hidden five-letter word in six tries,
//! with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_grid::core::{GameState, LetterFeedback, Outcome, Word, evaluate_guess, status_message};
//!
//! let secret = Word::new("point").unwrap();
//! let guess = Word::new("pinto").unwrap();
//!
//! let evaluation = evaluate_guess(&secret, &guess);
//! assert_eq!(evaluation.feedback()[0], LetterFeedback::CorrectPlace);
//! assert_eq!(evaluation.feedback()[1], LetterFeedback::WrongPlace);
//!
//! let state = GameState::new().submit_guess(&evaluation).unwrap();
//! assert_eq!(state.outcome(), Outcome::InProgress);
//! assert_eq!(status_message(&state, &secret), None);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Game sessions and persistence
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Data directory and file locations
pub mod config;

// Log setup
pub mod logging;
