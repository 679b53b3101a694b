//! Formatting utilities for terminal output

use crate::core::{Evaluation, LetterFeedback};
use crate::session::Board;
use colored::{ColoredString, Colorize};

/// Color one letter tile by its feedback
#[must_use]
pub fn letter_tile(letter: char, feedback: LetterFeedback) -> ColoredString {
    let tile = format!(" {letter} ");
    match feedback {
        LetterFeedback::CorrectPlace => tile.black().on_green().bold(),
        LetterFeedback::WrongPlace => tile.black().on_yellow().bold(),
        LetterFeedback::Absent => tile.white().on_bright_black(),
    }
}

/// A submitted row as colored tiles
#[must_use]
pub fn colored_row(letters: &str, evaluation: &Evaluation) -> String {
    letters
        .chars()
        .zip(evaluation.feedback())
        .map(|(letter, &feedback)| letter_tile(letter, feedback).to_string())
        .collect()
}

/// Shareable emoji grid of the submitted rows, one line per guess
///
/// # Examples
/// ```
/// use wordle_grid::core::Word;
/// use wordle_grid::output::formatters::share_grid;
/// use wordle_grid::session::Session;
/// use wordle_grid::wordlists::Dictionary;
///
/// let dictionary = Dictionary::embedded();
/// let mut session = Session::new(&dictionary, Word::new("speed").unwrap());
/// session.submit("erase").unwrap();
/// session.submit("speed").unwrap();
///
/// assert_eq!(share_grid(session.board()), "🟨⬜⬜🟨🟨\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_grid(board: &Board) -> String {
    board
        .submitted()
        .map(|(_, evaluation)| evaluation.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// "3/6", or "X/6" for a lost game
#[must_use]
pub fn score_line(attempts_used: usize, max_attempts: usize, won: bool) -> String {
    if won {
        format!("{attempts_used}/{max_attempts}")
    } else {
        format!("X/{max_attempts}")
    }
}
