//! Daily secret word rotation
//!
//! The history records every word drawn so far, newest first, and the day
//! the newest one was drawn. A new word is drawn the first time the game
//! runs on a new day, avoiding words that were already used.

use super::storage::{self, Result};
use crate::core::Word;
use chrono::NaiveDate;
use log::{info, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordHistory {
    words: Vec<String>,
    last_updated: Option<NaiveDate>,
}

impl WordHistory {
    /// Read the history file, starting empty if there is none
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(storage::read_json(path)?.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        storage::write_json(path, self)
    }

    /// Most recently drawn word
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub const fn last_updated(&self) -> Option<NaiveDate> {
        self.last_updated
    }

    /// True when no word has been drawn on `today`
    #[must_use]
    pub fn is_stale(&self, today: NaiveDate) -> bool {
        self.words.is_empty() || self.last_updated != Some(today)
    }

    /// Word for `today`, drawing a new one if the current word is stale
    ///
    /// Returns `None` only when `answers` is empty and no valid word is on
    /// record.
    pub fn word_for_day<R: Rng + ?Sized>(
        &mut self,
        today: NaiveDate,
        answers: &[Word],
        rng: &mut R,
    ) -> Option<Word> {
        if !self.is_stale(today) {
            match self.current().map(Word::new) {
                Some(Ok(word)) => return Some(word),
                Some(Err(e)) => warn!("Ignoring malformed word in history: {e}"),
                None => {}
            }
        }

        self.draw(today, answers, rng)
    }

    /// Draw a word not used before (any answer once all are used)
    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        today: NaiveDate,
        answers: &[Word],
        rng: &mut R,
    ) -> Option<Word> {
        let unused: Vec<&Word> = answers
            .iter()
            .filter(|word| !self.words.iter().any(|used| used == word.text()))
            .collect();

        let word = if let Some(&word) = unused.choose(rng) {
            word.clone()
        } else {
            warn!("Every answer has been used, repeating words");
            answers.choose(rng)?.clone()
        };

        info!("Drew new secret word for {today}");
        self.words.insert(0, word.text().to_string());
        self.last_updated = Some(today);
        Some(word)
    }
}
