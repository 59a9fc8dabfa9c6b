//! Per-user key/value settings grouped into named collections.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::{DEFAULT_LOCK_TIMEOUT_MS, LockGuard, atomic_write, lock_dir_for};

/// Settings storage used to remember output directory choices.
///
/// Mirrors a writable settings store: values live in named collections and
/// are typed as strings or booleans. Setters only change the in-memory view;
/// [`PreferenceStore::flush`] makes them durable.
pub trait PreferenceStore {
    fn collection_exists(&self, collection: &str) -> bool;

    /// Create `collection` if it does not exist yet.
    fn create_collection(&mut self, collection: &str);

    fn get_string(&self, collection: &str, key: &str) -> Option<String>;

    /// Set a string value, creating the collection if needed.
    fn set_string(&mut self, collection: &str, key: &str, value: &str);

    fn get_bool(&self, collection: &str, key: &str) -> Option<bool>;

    /// Set a boolean value, creating the collection if needed.
    fn set_bool(&mut self, collection: &str, key: &str, value: bool);

    /// Keys of the string values in `collection`, in insertion order.
    fn string_keys(&self, collection: &str) -> Vec<String>;

    /// Persist pending changes.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Collection {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    strings: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    bools: IndexMap<String, bool>,
}

/// Serializable contents shared by every store implementation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceDocument {
    #[serde(default)]
    collections: IndexMap<String, Collection>,
}

impl PreferenceDocument {
    fn collection_mut(&mut self, collection: &str) -> &mut Collection {
        self.collections.entry(collection.to_string()).or_default()
    }

    fn apply(&mut self, change: &Change) {
        match change {
            Change::CreateCollection(collection) => {
                self.collection_mut(collection);
            }
            Change::SetString {
                collection,
                key,
                value,
            } => {
                self.collection_mut(collection)
                    .strings
                    .insert(key.clone(), value.clone());
            }
            Change::SetBool {
                collection,
                key,
                value,
            } => {
                self.collection_mut(collection)
                    .bools
                    .insert(key.clone(), *value);
            }
        }
    }
}

impl PreferenceStore for PreferenceDocument {
    fn collection_exists(&self, collection: &str) -> bool {
        self.collections.contains_key(collection)
    }

    fn create_collection(&mut self, collection: &str) {
        self.collection_mut(collection);
    }

    fn get_string(&self, collection: &str, key: &str) -> Option<String> {
        self.collections.get(collection)?.strings.get(key).cloned()
    }

    fn set_string(&mut self, collection: &str, key: &str, value: &str) {
        self.collection_mut(collection)
            .strings
            .insert(key.to_string(), value.to_string());
    }

    fn get_bool(&self, collection: &str, key: &str) -> Option<bool> {
        self.collections.get(collection)?.bools.get(key).copied()
    }

    fn set_bool(&mut self, collection: &str, key: &str, value: bool) {
        self.collection_mut(collection)
            .bools
            .insert(key.to_string(), value);
    }

    fn string_keys(&self, collection: &str) -> Vec<String> {
        self.collections
            .get(collection)
            .map(|c| c.strings.keys().cloned().collect())
            .unwrap_or_default()
    }
}

/// In-process store with nothing to persist.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    document: PreferenceDocument,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn collection_exists(&self, collection: &str) -> bool {
        self.document.collection_exists(collection)
    }

    fn create_collection(&mut self, collection: &str) {
        self.document.create_collection(collection);
    }

    fn get_string(&self, collection: &str, key: &str) -> Option<String> {
        self.document.get_string(collection, key)
    }

    fn set_string(&mut self, collection: &str, key: &str, value: &str) {
        self.document.set_string(collection, key, value);
    }

    fn get_bool(&self, collection: &str, key: &str) -> Option<bool> {
        self.document.get_bool(collection, key)
    }

    fn set_bool(&mut self, collection: &str, key: &str, value: bool) {
        self.document.set_bool(collection, key, value);
    }

    fn string_keys(&self, collection: &str) -> Vec<String> {
        self.document.string_keys(collection)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Change {
    CreateCollection(String),
    SetString {
        collection: String,
        key: String,
        value: String,
    },
    SetBool {
        collection: String,
        key: String,
        value: bool,
    },
}

/// Store backed by a JSON file.
///
/// Reads happen under a shared lock. Changes are recorded and replayed onto
/// the current on-disk document under an exclusive lock when flushed, so two
/// processes remembering different source files do not lose each other's
/// entries.
#[derive(Debug)]
pub struct JsonPreferenceStore {
    path: PathBuf,
    lock_path: PathBuf,
    lock_timeout_ms: u64,
    document: PreferenceDocument,
    pending: Vec<Change>,
}

impl JsonPreferenceStore {
    /// Open the store at `path`. A missing file yields an empty store.
    ///
    /// # Errors
    /// Returns `LockTimeout` if a writer holds the lock too long.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_timeout(path, DEFAULT_LOCK_TIMEOUT_MS)
    }

    /// Like [`JsonPreferenceStore::open`] with an explicit lock timeout.
    ///
    /// # Errors
    /// Returns `LockTimeout` if a writer holds the lock too long.
    pub fn open_with_timeout(path: &Path, lock_timeout_ms: u64) -> Result<Self> {
        let lock_path = Self::lock_path_for(path);
        let document = {
            let _guard = LockGuard::shared(&lock_path, lock_timeout_ms)?;
            read_document(path)
        };
        Ok(Self {
            path: path.to_path_buf(),
            lock_path,
            lock_timeout_ms,
            document,
            pending: Vec::new(),
        })
    }

    fn lock_path_for(path: &Path) -> PathBuf {
        lock_dir_for(path).join("preferences.lock")
    }

    fn record(&mut self, change: Change) {
        self.document.apply(&change);
        self.pending.push(change);
    }
}

fn read_document(path: &Path) -> PreferenceDocument {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return PreferenceDocument::default();
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read preferences, ignoring them");
            return PreferenceDocument::default();
        }
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "corrupted preferences file, ignoring it");
        PreferenceDocument::default()
    })
}

fn write_document(path: &Path, document: &PreferenceDocument) -> Result<()> {
    let mut content = serde_json::to_string_pretty(document)?;
    content.push('\n');
    atomic_write(path, content.as_bytes())?;
    tracing::debug!(path = %path.display(), "saved preferences");
    Ok(())
}

impl PreferenceStore for JsonPreferenceStore {
    fn collection_exists(&self, collection: &str) -> bool {
        self.document.collection_exists(collection)
    }

    fn create_collection(&mut self, collection: &str) {
        self.record(Change::CreateCollection(collection.to_string()));
    }

    fn get_string(&self, collection: &str, key: &str) -> Option<String> {
        self.document.get_string(collection, key)
    }

    fn set_string(&mut self, collection: &str, key: &str, value: &str) {
        self.record(Change::SetString {
            collection: collection.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    fn get_bool(&self, collection: &str, key: &str) -> Option<bool> {
        self.document.get_bool(collection, key)
    }

    fn set_bool(&mut self, collection: &str, key: &str, value: bool) {
        self.record(Change::SetBool {
            collection: collection.to_string(),
            key: key.to_string(),
            value,
        });
    }

    fn string_keys(&self, collection: &str) -> Vec<String> {
        self.document.string_keys(collection)
    }

    fn flush(&mut self) -> Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let _guard = LockGuard::exclusive(&self.lock_path, self.lock_timeout_ms)?;
        let mut document = read_document(&self.path);
        for change in &self.pending {
            document.apply(change);
        }
        write_document(&self.path, &document)?;
        self.document = document;
        self.pending.clear();
        Ok(())
    }
}

#[cfg(test)]
#[path = "prefs_tests.rs"]
mod tests;
