//! Summary of a session's progress

use crate::core::{Evaluation, GameState};
use crate::output::formatters::share_grid;
use crate::session::Session;

#[derive(Debug, Clone)]
pub struct GameSummary {
    /// Submitted rows with their feedback
    pub rows: Vec<(String, Evaluation)>,
    pub state: GameState,
    pub message: Option<String>,
    /// Emoji grid for sharing
    pub share: String,
}

#[must_use]
pub fn summarize(session: &Session) -> GameSummary {
    GameSummary {
        rows: session
            .board()
            .submitted()
            .map(|(row, evaluation)| (row.text(), *evaluation))
            .collect(),
        state: *session.state(),
        message: session.status_message(),
        share: share_grid(session.board()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, Word};
    use crate::wordlists::Dictionary;

    #[test]
    fn summary_of_won_game() {
        let dictionary = Dictionary::embedded();
        let mut session = Session::new(&dictionary, Word::new("point").unwrap());
        session.submit("crane").unwrap();
        session.submit("point").unwrap();

        let summary = summarize(&session);
        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].0, "CRANE");
        assert_eq!(summary.state.outcome(), Outcome::Won);
        assert_eq!(
            summary.message.as_deref(),
            Some("Congrats! You guessed the word POINT in 2 tries.")
        );
        assert_eq!(summary.share.lines().count(), 2);
    }

    #[test]
    fn summary_of_fresh_game() {
        let dictionary = Dictionary::embedded();
        let session = Session::new(&dictionary, Word::new("point").unwrap());

        let summary = summarize(&session);
        assert!(summary.rows.is_empty());
        assert_eq!(summary.message, None);
        assert!(summary.share.is_empty());
    }
}
