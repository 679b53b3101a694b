//! Human-readable outcome messages

use super::state::{GameState, Outcome};
use super::word::Word;

/// Message describing a finished game, or `None` while it is in progress
///
/// # Examples
/// ```
/// use wordle_grid::core::{GameState, Word, evaluate_guess, status_message};
///
/// let secret = Word::new("point").unwrap();
/// assert_eq!(status_message(&GameState::new(), &secret), None);
///
/// let won = GameState::new()
///     .submit_guess(&evaluate_guess(&secret, &secret))
///     .unwrap();
/// assert_eq!(
///     status_message(&won, &secret).as_deref(),
///     Some("Congrats! You guessed the word POINT in 1 try.")
/// );
/// ```
#[must_use]
pub fn status_message(state: &GameState, secret: &Word) -> Option<String> {
    match state.outcome() {
        Outcome::InProgress => None,
        Outcome::Won => {
            let attempts = state.attempts_used();
            let unit = if attempts == 1 { "try" } else { "tries" };
            Some(format!(
                "Congrats! You guessed the word {secret} in {attempts} {unit}."
            ))
        }
        Outcome::Lost => Some(format!(
            "The correct word is {secret}. You may try again tomorrow!"
        )),
    }
}
