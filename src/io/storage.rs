//! String-keyed persistence with JSON helpers that never fail the caller
//!
//! Stores hold opaque string values. The typed helpers encode values as JSON
//! and absorb every failure at this boundary: a failed save is logged and
//! reported as `false`, a failed or malformed load is logged and replaced by
//! the caller's default.

use crate::io::error::{PoetryError, Result, file_system_error};
use serde::{Serialize, de::DeserializeOwned};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// String-keyed, string-valued store
pub trait KeyValueStore {
    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be persisted
    fn save(&mut self, key: &str, value: &str) -> Result<()>;

    /// Value stored under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the store could not be read
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Delete the value stored under `key`; deleting a missing key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the removal could not be persisted
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Delete every value
    ///
    /// # Errors
    ///
    /// Returns an error if the store could not be emptied
    fn clear(&mut self) -> Result<()>;

    /// Whether a value is stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the store could not be read
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.load(key)?.is_some())
    }
}

/// Volatile store kept in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }
}

/// Store backed by a single JSON object file
///
/// The whole file is rewritten after every mutation. A missing file is an
/// empty store; an unreadable or malformed file is treated the same way and
/// will be overwritten by the next successful save.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, reading any existing content
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::read_entries(&path);
        tracing::debug!(path = %path.display(), keys = entries.len(), "opened store");
        Self { path, entries }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> BTreeMap<String, String> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "store unreadable, starting empty");
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "store malformed, starting empty");
            BTreeMap::new()
        })
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }

        let content =
            serde_json::to_string_pretty(&self.entries).map_err(|e| PoetryError::Serialization {
                key: self.path.display().to_string(),
                source: e,
            })?;

        fs::write(&self.path, content).map_err(|e| file_system_error(&self.path, "write", e))
    }
}

impl KeyValueStore for FileStore {
    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.flush()
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.flush()
    }
}

/// Encode `value` as JSON and store it under `key`
///
/// Returns whether the value was persisted; failures are logged.
pub fn save_json<S, T>(store: &mut S, key: &str, value: &T) -> bool
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let encoded = match serde_json::to_string(value) {
        Ok(encoded) => encoded,
        Err(e) => {
            tracing::error!(key, error = %e, "failed to encode value");
            return false;
        }
    };

    match store.save(key, &encoded) {
        Ok(()) => {
            tracing::debug!(key, bytes = encoded.len(), "value saved");
            true
        }
        Err(e) => {
            tracing::error!(key, error = %e, "failed to save value");
            false
        }
    }
}

/// Decode the JSON value stored under `key`, or `default` when absent or unusable
pub fn load_json<S, T>(store: &S, key: &str, default: T) -> T
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.load(key) {
        Ok(Some(encoded)) => serde_json::from_str(&encoded).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "stored value malformed, using default");
            default
        }),
        Ok(None) => default,
        Err(e) => {
            tracing::error!(key, error = %e, "failed to load value, using default");
            default
        }
    }
}

/// Delete the value under `key`, returning whether the removal persisted
pub fn remove_key<S>(store: &mut S, key: &str) -> bool
where
    S: KeyValueStore + ?Sized,
{
    match store.remove(key) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(key, error = %e, "failed to remove value");
            false
        }
    }
}
