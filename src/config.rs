//! Resolved runtime settings
//!
//! Built once in `main` from the command line (and `WORDLE_GRID_DATA_DIR`),
//! then passed to the commands.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "wordle_grid";
const SAVE_FILE: &str = "save.json";
const HISTORY_FILE: &str = "history.json";
const LOG_FILE: &str = "wordle_grid.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the save, the word history and the TUI log
    pub data_dir: PathBuf,
    /// Fixed secret word instead of the daily rotation
    pub secret_word: Option<String>,
    /// Newline-delimited file of accepted guesses instead of the embedded list
    pub wordlist: Option<PathBuf>,
}

impl Config {
    /// Resolve settings, falling back to the platform data directory
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory is given and the platform has
    /// no per-user data directory.
    pub fn new(
        data_dir: Option<PathBuf>,
        secret_word: Option<String>,
        wordlist: Option<PathBuf>,
    ) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => default_data_dir().context("No data directory found, pass --data-dir")?,
        };

        if data_dir.as_os_str().is_empty() {
            bail!("Data directory must not be empty");
        }

        Ok(Self {
            data_dir,
            secret_word,
            wordlist,
        })
    }

    #[must_use]
    pub fn save_path(&self) -> PathBuf {
        self.data_dir.join(SAVE_FILE)
    }

    #[must_use]
    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(HISTORY_FILE)
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// `<platform data dir>/wordle_grid`, e.g. `~/.local/share/wordle_grid`
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR))
}
