//! Clearing saved progress

use crate::config::Config;
use crate::session::storage::{self, FileStore, SaveStore, StorageError};
use log::info;

/// Delete the saved game, and the word history when `include_history` is set
///
/// # Errors
///
/// Returns an error if an existing file cannot be removed.
pub fn reset(config: &Config, include_history: bool) -> Result<(), StorageError> {
    FileStore::new(config.save_path()).clear()?;
    info!("Cleared saved game");

    if include_history {
        storage::remove_file(&config.history_path())?;
        info!("Cleared word history");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reset_removes_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(Some(dir.path().to_path_buf()), None, None).unwrap();
        fs::write(config.save_path(), "{}").unwrap();
        fs::write(config.history_path(), "{}").unwrap();

        reset(&config, false).unwrap();
        assert!(!config.save_path().exists());
        assert!(config.history_path().exists());

        reset(&config, true).unwrap();
        assert!(!config.history_path().exists());
    }

    #[test]
    fn reset_without_files_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(Some(dir.path().join("none")), None, None).unwrap();
        reset(&config, true).unwrap();
    }
}
