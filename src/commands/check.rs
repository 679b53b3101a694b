//! One-off evaluation of a guess against a given secret

use crate::core::{Evaluation, Word, WordError, evaluate_guess};

/// Result of checking a single guess
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub evaluation: Evaluation,
}

/// Evaluate `guess` against `secret` without a dictionary or a session
///
/// # Errors
///
/// Returns `WordError` if either argument is not a 5-letter word.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let evaluation = evaluate_guess(&secret, &guess);

    Ok(CheckResult {
        secret,
        guess,
        evaluation,
    })
}
