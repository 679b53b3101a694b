//! Guess evaluation
//!
//! Compares a guess against the secret word and labels every position:
//! - `CorrectPlace`: same letter at the same position
//! - `WrongPlace`: letter occurs elsewhere among the still unmatched secret letters
//! - `Absent`: no unmatched occurrence is left

use super::word::{WORD_LENGTH, Word};

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    CorrectPlace,
    WrongPlace,
    Absent,
}

impl LetterFeedback {
    /// Emoji tile used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::CorrectPlace => '🟩',
            Self::WrongPlace => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Result of evaluating one guess against the secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation {
    feedback: [LetterFeedback; WORD_LENGTH],
    is_winning_guess: bool,
}

impl Evaluation {
    /// Per-position feedback, in guess order
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.feedback
    }

    /// True exactly when the guess equals the secret word
    #[inline]
    #[must_use]
    pub const fn is_winning_guess(&self) -> bool {
        self.is_winning_guess
    }

    /// Count positions with the given feedback
    #[must_use]
    pub fn count(&self, kind: LetterFeedback) -> usize {
        self.feedback.iter().filter(|&&f| f == kind).count()
    }

    /// Convert to an emoji string such as "🟨⬜⬜🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.feedback.iter().map(|f| f.emoji()).collect()
    }
}

/// Evaluate `guess` against `secret`
///
/// Duplicate letters are handled with two passes over a working copy of the
/// secret:
/// 1. Exact matches are marked `CorrectPlace` and removed from the copy
/// 2. Remaining positions, left to right, consume the leftmost unmatched
///    occurrence of their letter (`WrongPlace`) or are `Absent`
///
/// A letter therefore never receives more `CorrectPlace` + `WrongPlace`
/// marks than it has occurrences in the secret.
///
/// # Examples
/// ```
/// use wordle_grid::core::{LetterFeedback::*, Word, evaluate_guess};
///
/// let secret = Word::new("speed").unwrap();
/// let guess = Word::new("erase").unwrap();
/// let evaluation = evaluate_guess(&secret, &guess);
///
/// assert_eq!(
///     evaluation.feedback(),
///     &[WrongPlace, Absent, Absent, WrongPlace, WrongPlace]
/// );
/// assert_eq!(evaluation.to_emoji(), "🟨⬜⬜🟨🟨");
/// assert!(!evaluation.is_winning_guess());
/// ```
#[must_use]
pub fn evaluate_guess(secret: &Word, guess: &Word) -> Evaluation {
    let mut remaining: [Option<u8>; WORD_LENGTH] = secret.letters().map(Some);
    let mut feedback: [Option<LetterFeedback>; WORD_LENGTH] = [None; WORD_LENGTH];

    // First pass: exact position matches
    for (i, (&g, &s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
        if g == s {
            feedback[i] = Some(LetterFeedback::CorrectPlace);
            remaining[i] = None;
        }
    }

    // Second pass: misplaced letters from what is left
    for (i, &g) in guess.letters().iter().enumerate() {
        if feedback[i].is_some() {
            continue;
        }

        feedback[i] = Some(
            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(g)) {
                *slot = None;
                LetterFeedback::WrongPlace
            } else {
                LetterFeedback::Absent
            },
        );
    }

    Evaluation {
        feedback: feedback.map(|f| f.unwrap_or(LetterFeedback::Absent)),
        is_winning_guess: guess == secret,
    }
}

#[cfg(test)]
mod tests {
    use super::LetterFeedback::{Absent, CorrectPlace, WrongPlace};
    use super::*;

    fn eval(secret: &str, guess: &str) -> Evaluation {
        evaluate_guess(&Word::new(secret).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn identical_words_win() {
        let evaluation = eval("POINT", "POINT");

        assert_eq!(evaluation.feedback(), &[CorrectPlace; WORD_LENGTH]);
        assert!(evaluation.is_winning_guess());
        assert_eq!(evaluation.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn disjoint_words_all_absent() {
        let evaluation = eval("POINT", "CRASH");

        assert_eq!(evaluation.feedback(), &[Absent; WORD_LENGTH]);
        assert!(!evaluation.is_winning_guess());
    }

    #[test]
    fn duplicate_guess_letters_missing_from_secret() {
        // Two L's, zero in the secret
        let evaluation = eval("POINT", "LLAMA");
        assert_eq!(evaluation.feedback(), &[Absent; WORD_LENGTH]);
    }

    #[test]
    fn duplicate_letters_capped_by_secret() {
        // No exact matches; both E's of the guess use up the two E's of SPEED
        let evaluation = eval("SPEED", "ERASE");

        assert_eq!(
            evaluation.feedback(),
            &[WrongPlace, Absent, Absent, WrongPlace, WrongPlace]
        );
        assert_eq!(evaluation.to_emoji(), "🟨⬜⬜🟨🟨");
    }

    #[test]
    fn exact_match_takes_priority_over_earlier_misplaced() {
        // The second O of ROBOT is exact, so the first O only gets the
        // remaining O of FLOOR
        let evaluation = eval("FLOOR", "ROBOT");

        assert_eq!(
            evaluation.feedback(),
            &[WrongPlace, WrongPlace, Absent, CorrectPlace, Absent]
        );
    }

    #[test]
    fn misplaced_consumed_left_to_right() {
        // The only E of CRANE is taken by the exact match
        let evaluation = eval("CRANE", "EERIE");

        assert_eq!(
            evaluation.feedback(),
            &[Absent, Absent, WrongPlace, Absent, CorrectPlace]
        );

        let evaluation = eval("ABBEY", "EEEEE");
        assert_eq!(
            evaluation.feedback(),
            &[Absent, Absent, Absent, CorrectPlace, Absent]
        );

        // One spare E in LEVEL: the leftmost unmarked guess E gets it
        let evaluation = eval("LEVEL", "EERIE");
        assert_eq!(
            evaluation.feedback(),
            &[WrongPlace, CorrectPlace, Absent, Absent, Absent]
        );
    }

    #[test]
    fn one_label_per_position() {
        for (secret, guess) in [("SPEED", "ERASE"), ("POINT", "LLAMA"), ("ABBEY", "BABES")] {
            let evaluation = eval(secret, guess);
            let total = evaluation.count(CorrectPlace)
                + evaluation.count(WrongPlace)
                + evaluation.count(Absent);
            assert_eq!(total, WORD_LENGTH);
        }
    }

    #[test]
    fn marks_never_exceed_secret_occurrences() {
        let pairs = [
            ("SPEED", "ERASE"),
            ("SPEED", "EEEEE"),
            ("ABBEY", "BABES"),
            ("ALLOY", "LLAMA"),
            ("GEESE", "EAGLE"),
            ("MAMMA", "AMASS"),
        ];

        for (secret, guess) in pairs {
            let secret_word = Word::new(secret).unwrap();
            let guess_word = Word::new(guess).unwrap();
            let evaluation = evaluate_guess(&secret_word, &guess_word);
            let counts = secret_word.letter_counts();

            for &letter in guess_word.letters() {
                let marked = guess_word
                    .letters()
                    .iter()
                    .zip(evaluation.feedback())
                    .filter(|&(&l, &f)| l == letter && f != Absent)
                    .count();
                let available = counts.get(&letter).copied().unwrap_or(0);
                assert!(
                    marked <= available,
                    "{guess} vs {secret}: {} marked {marked} times, secret has {available}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let secret = Word::new("SPEED").unwrap();
        let guess = Word::new("ERASE").unwrap();

        let first = evaluate_guess(&secret, &guess);
        let second = evaluate_guess(&secret, &guess);

        assert_eq!(first, second);
        assert_eq!(secret.text(), "SPEED");
        assert_eq!(guess.text(), "ERASE");
    }

    #[test]
    fn count_by_kind() {
        let evaluation = eval("SLATE", "CRANE");
        assert_eq!(evaluation.count(CorrectPlace), 2);
        assert_eq!(evaluation.count(WrongPlace), 0);
        assert_eq!(evaluation.count(Absent), 3);
    }
}
