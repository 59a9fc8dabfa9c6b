use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;

use super::prefs::PreferenceStore;

/// Root collection holding every remembered output directory.
pub const ROOT_COLLECTION: &str = "Gtest Template";

/// Global flag: honour remembered directories instead of the source's own.
pub const USE_USER_DEFINED_PATH: &str = "useUserDefinedPath";

/// What is remembered for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredOutput {
    /// Remembered directory, if one was recorded and is non-empty.
    pub directory: Option<PathBuf>,
    pub use_user_defined_path: bool,
}

/// A remembered source → output directory pair, for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputEntry {
    pub source: String,
    pub directory: String,
}

/// The generator's collection layout on top of any [`PreferenceStore`].
///
/// Each source file gets a marker sub-collection `Gtest Template\<source>`;
/// its directory is stored in the root collection under the source path.
#[derive(Debug)]
pub struct OutputPreferences<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> OutputPreferences<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    fn source_collection(source: &str) -> String {
        format!("{ROOT_COLLECTION}\\{source}")
    }

    /// Stored choice for `source`, or `None` on first use.
    #[must_use]
    pub fn lookup(&self, source: &str) -> Option<StoredOutput> {
        if !self.store.collection_exists(&Self::source_collection(source)) {
            return None;
        }
        let directory = self
            .store
            .get_string(ROOT_COLLECTION, source)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        let use_user_defined_path = self
            .store
            .get_bool(ROOT_COLLECTION, USE_USER_DEFINED_PATH)
            .unwrap_or(false);
        Some(StoredOutput {
            directory,
            use_user_defined_path,
        })
    }

    /// Remember `directory` for `source` and turn the global flag on.
    ///
    /// # Errors
    /// Returns an error if the store cannot be flushed.
    pub fn remember(&mut self, source: &str, directory: &Path) -> Result<()> {
        self.store.create_collection(ROOT_COLLECTION);
        self.store.create_collection(&Self::source_collection(source));
        self.store
            .set_bool(ROOT_COLLECTION, USE_USER_DEFINED_PATH, true);
        self.store
            .set_string(ROOT_COLLECTION, source, &directory.to_string_lossy());
        self.store.flush()
    }

    /// Every remembered source and its directory, in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<OutputEntry> {
        self.store
            .string_keys(ROOT_COLLECTION)
            .into_iter()
            .filter_map(|source| {
                let directory = self.store.get_string(ROOT_COLLECTION, &source)?;
                Some(OutputEntry { source, directory })
            })
            .collect()
    }

    #[must_use]
    pub fn use_user_defined_path(&self) -> bool {
        self.store
            .get_bool(ROOT_COLLECTION, USE_USER_DEFINED_PATH)
            .unwrap_or(false)
    }
}

#[cfg(test)]
#[path = "output_prefs_tests.rs"]
mod tests;
