//! Key-value stores backing persistence.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use thiserror::Error;

/// Errors that can occur when touching durable storage.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read store file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write store file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse store file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed value under key '{key}': {message}")]
    MalformedValue { key: String, message: String },
}

/// Durable string-to-string storage.
///
/// Values are text-encoded by the caller; the store knows nothing
/// about their structure.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. Absent keys are `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-backed store: one JSON object of string values on disk.
///
/// The file is read once at open and cached; sets write through. The
/// parent directory is created on first write, so opening against a
/// path that does not exist yet is fine.
pub struct FileStore {
    path: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Default store location under the platform data directory.
    ///
    /// Falls back to the current directory if no data dir is available.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("spendtrack").join("store.json")
    }

    /// Open a store at the given path.
    ///
    /// A missing file yields an empty store; an unreadable or
    /// unparseable one is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let cache = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| StoreError::ReadError {
                path: path.clone(),
                source: e,
            })?;
            serde_json::from_str(&content).map_err(|e| StoreError::ParseError {
                path: path.clone(),
                source: e,
            })?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    /// The on-disk location of this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, map: &HashMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;
        }
        let content =
            serde_json::to_string_pretty(map).map_err(|e| StoreError::ParseError {
                path: self.path.clone(),
                source: e,
            })?;
        fs::write(&self.path, content).map_err(|e| StoreError::WriteError {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let cache = self.cache.read().expect("store lock poisoned");
        Ok(cache.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut cache = self.cache.write().expect("store lock poisoned");
        cache.insert(key.to_string(), value.to_string());
        self.persist(&cache)
    }
}

/// In-memory store for headless and test contexts.
///
/// Starts empty and forgets everything on drop, which gives the
/// bootstrap its documented defaults (zero budget, no expenses).
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.read().expect("store lock poisoned");
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.write().expect("store lock poisoned");
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemoryStore::new();
        assert_eq!(store.get("budget").unwrap(), None);
        store.set("budget", "1000").unwrap();
        assert_eq!(store.get("budget").unwrap().as_deref(), Some("1000"));
        store.set("budget", "500").unwrap();
        assert_eq!(store.get("budget").unwrap().as_deref(), Some("500"));
    }
}
