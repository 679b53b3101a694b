//! Saved game persistence
//!
//! A save is an opaque JSON record of the fields a session needs to resume:
//! the secret word, attempt count, outcome and the letters in the grid.

use crate::core::Outcome;
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed data in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// Persisted progress of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveData {
    pub secret_word: String,
    pub attempts_used: usize,
    pub outcome: Outcome,
    /// Letters per row, submitted rows first, then the row being typed
    pub grid: Vec<String>,
}

/// Where sessions are loaded from and saved to
pub trait SaveStore {
    /// Read the saved game, `None` if nothing has been saved
    ///
    /// # Errors
    ///
    /// Returns an error if the save exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<SaveData>>;

    /// # Errors
    ///
    /// Returns an error if the save cannot be written.
    fn save(&mut self, data: &SaveData) -> Result<()>;

    /// Remove the saved game; clearing an empty store is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if an existing save cannot be removed.
    fn clear(&mut self) -> Result<()>;
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStore for FileStore {
    fn load(&self) -> Result<Option<SaveData>> {
        read_json(&self.path)
    }

    fn save(&mut self, data: &SaveData) -> Result<()> {
        write_json(&self.path, data)
    }

    fn clear(&mut self) -> Result<()> {
        remove_file(&self.path)
    }
}

/// In-memory store, for embedding the game without a filesystem
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Option<SaveData>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemoryStore {
    fn load(&self) -> Result<Option<SaveData>> {
        Ok(self.data.clone())
    }

    fn save(&mut self, data: &SaveData) -> Result<()> {
        self.data = Some(data.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.data = None;
        Ok(())
    }
}

/// Read a JSON file, `None` if it does not exist
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| StorageError::Json {
            path: path.to_path_buf(),
            source,
        })
}

/// Write a JSON file, creating parent directories as needed
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let io_err = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let content = serde_json::to_string_pretty(value).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, content).map_err(io_err)?;
    debug!("Wrote {}", path.display());

    Ok(())
}

/// Delete a file, ignoring a missing one
pub(crate) fn remove_file(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StorageError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SaveData {
        SaveData {
            secret_word: "POINT".to_string(),
            attempts_used: 1,
            outcome: Outcome::InProgress,
            grid: vec!["CRANE".to_string(), "SL".to_string()],
        }
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("save.json"));

        assert_eq!(store.load().unwrap(), None);
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn file_store_reports_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Json { .. }));
        assert!(err.to_string().contains("save.json"));
    }

    #[test]
    fn save_uses_camel_case_fields() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"secretWord\":\"POINT\""));
        assert!(json.contains("\"attemptsUsed\":1"));
        assert!(json.contains("\"outcome\":\"InProgress\""));
        assert!(json.contains("\"grid\":[\"CRANE\",\"SL\"]"));
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
