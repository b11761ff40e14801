//! Persistence boundary - a pluggable key-value backend holding the one
//! catalog document
//!
//! The store never touches the filesystem directly; it goes through a
//! [`StorageBackend`]. [`FileBackend`] is the production implementation (a
//! single JSON file), [`MemoryBackend`] is the test double.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Blocking read/write of the serialized catalog document
pub trait StorageBackend {
    /// Load the stored document text, `None` if nothing has been stored yet
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the stored document text
    fn save(&self, contents: &str) -> Result<(), StorageError>;

    /// Discard the stored document entirely
    fn clear(&self) -> Result<(), StorageError>;
}

/// Errors from the persistence medium
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read catalog at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write catalog at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// File-backed storage: the whole document lives in one JSON file
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    fn save(&self, contents: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StorageError::Write {
                    path: self.path.clone(),
                    source: e,
                })?;
            }
        }
        std::fs::write(&self.path, contents).map_err(|e| StorageError::Write {
            path: self.path.clone(),
            source: e,
        })
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Write {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}

/// In-memory storage for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryBackend {
    contents: RefCell<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.contents.borrow().clone())
    }

    fn save(&self, contents: &str) -> Result<(), StorageError> {
        *self.contents.borrow_mut() = Some(contents.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.contents.borrow_mut() = None;
        Ok(())
    }
}
