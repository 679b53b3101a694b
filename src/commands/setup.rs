//! Startup resolution
//!
//! The dictionary and the secret word are both resolved here, before any
//! session exists to accept input.

use crate::config::Config;
use crate::core::Word;
use crate::session::WordHistory;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{ANSWERS, Dictionary};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use log::{info, warn};
use rand::Rng;

/// Everything a session needs before it can start
#[derive(Debug, Clone)]
pub struct GameSetup {
    pub dictionary: Dictionary,
    pub secret: Word,
}

/// Load the dictionary and pick the secret word for `today`
///
/// # Errors
///
/// Returns an error if the word list file cannot be read or holds no words,
/// the `--word` override is malformed, or the word history cannot be read
/// or written.
pub fn prepare<R: Rng + ?Sized>(
    config: &Config,
    today: NaiveDate,
    rng: &mut R,
) -> Result<GameSetup> {
    let mut dictionary = load_dictionary(config)?;
    let secret = resolve_secret(config, today, rng)?;

    if dictionary.insert(secret.clone()) {
        warn!("Secret word is missing from the word list, adding it");
    }

    Ok(GameSetup { dictionary, secret })
}

fn load_dictionary(config: &Config) -> Result<Dictionary> {
    let Some(path) = &config.wordlist else {
        return Ok(Dictionary::embedded());
    };

    let words = load_from_file(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    if words.is_empty() {
        bail!("Word list {} contains no 5-letter words", path.display());
    }

    info!("Using {} words from {}", words.len(), path.display());
    Ok(Dictionary::new(words))
}

fn resolve_secret<R: Rng + ?Sized>(
    config: &Config,
    today: NaiveDate,
    rng: &mut R,
) -> Result<Word> {
    if let Some(text) = &config.secret_word {
        return Word::new(text).with_context(|| format!("Invalid --word {text:?}"));
    }

    let path = config.history_path();
    let mut history = WordHistory::load(&path)?;
    let stale = history.is_stale(today);

    let secret = history
        .word_for_day(today, &words_from_slice(ANSWERS), rng)
        .context("No answer words available")?;

    if stale {
        history.save(&path)?;
    }

    Ok(secret)
}
