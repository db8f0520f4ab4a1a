//! Blob store contracts and backends.
//!
//! # Responsibility
//! - Provide the one-string-value-per-key persistence seam the task store
//!   writes through.
//! - Keep filesystem details inside the core persistence boundary.
//!
//! # Invariants
//! - An absent key reads as `Ok(None)`, never as an error.
//! - A failed write must leave the previously stored value intact.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::PathBuf;

pub type BlobResult<T> = Result<T, BlobError>;

/// Backend error for blob reads and writes.
#[derive(Debug)]
pub enum BlobError {
    Io(std::io::Error),
    InvalidKey(String),
}

impl Display for BlobError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::InvalidKey(key) => write!(f, "invalid blob key `{key}`"),
        }
    }
}

impl Error for BlobError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidKey(_) => None,
        }
    }
}

impl From<std::io::Error> for BlobError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Key-value persistence interface for whole-collection blobs.
pub trait BlobStore {
    fn get(&self, key: &str) -> BlobResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> BlobResult<()>;
}

/// In-memory blob store for tests and headless embedding.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    entries: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> BlobResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> BlobResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed blob store keeping one `<key>.json` file per key under a
/// root directory scoped to the user profile.
#[derive(Debug)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn entry_path(&self, key: &str) -> BlobResult<PathBuf> {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(BlobError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> BlobResult<Option<String>> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> BlobResult<()> {
        let path = self.entry_path(key)?;
        fs::create_dir_all(&self.root)?;

        // Write through a sibling temp file and rename, so an interrupted
        // write never truncates the previous blob.
        let tmp_path = self.root.join(format!("{key}.json.tmp"));
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}
