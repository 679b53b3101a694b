//! Dictionary of accepted guesses

use super::loader::words_from_slice;
use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Set of words the player may guess
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from already parsed words
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// The embedded allowed list; answers are always included
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            words_from_slice(ALLOWED)
                .into_iter()
                .chain(words_from_slice(ANSWERS)),
        )
    }

    /// Dictionary membership check, case-insensitive
    ///
    /// Anything that is not a well-formed word is rejected.
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|word| self.contains(&word))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Add a word, e.g. a secret that is missing from a custom list
    pub fn insert(&mut self, word: Word) -> bool {
        self.words.insert(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
