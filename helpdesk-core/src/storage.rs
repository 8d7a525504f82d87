use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Request;

/// Error type for storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Handles saving and loading requests from disk.
///
/// The file is opened, read or written in full, and closed within a single
/// call; no handle outlives the operation.
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    /// Creates a new Storage instance
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Returns the path to the storage file
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Loads requests from the JSON file.
    ///
    /// Returns `Ok(None)` when the file does not exist, and also when it
    /// exists but does not parse as a request array: malformed data yields
    /// nothing usable rather than a partial load, and the caller keeps its
    /// in-memory state. Read failures other than absence propagate.
    pub fn load(&self) -> Result<Option<Vec<Request>>, StorageError> {
        let file = match File::open(&self.file_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Io(e)),
        };
        let reader = BufReader::new(file);

        match serde_json::from_reader(reader) {
            Ok(requests) => Ok(Some(requests)),
            Err(_) => Ok(None),
        }
    }

    /// Saves the full ordered request list as indented JSON, overwriting the
    /// file.
    pub fn save(&self, requests: &[Request]) -> Result<(), StorageError> {
        // Create parent directories if they don't exist
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(requests)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;
        fs::write(&self.file_path, json)?;

        Ok(())
    }
}
