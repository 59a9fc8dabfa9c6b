use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::host::FolderPrompt;
use crate::path_utils::containing_dir;
use crate::state::{DEFAULT_LOCK_TIMEOUT_MS, LockGuard, atomic_write, lock_file_for};

use super::document::{case_names, insert_case};
use super::output_prefs::OutputPreferences;
use super::prefs::PreferenceStore;

/// A directory choice that is persisted only once the test file is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPreference {
    pub source_key: String,
    pub directory: PathBuf,
}

/// Outcome of [`TestFileStore::resolve_output_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutput {
    pub dir: PathBuf,
    /// No preference existed for this source yet.
    pub first_time: bool,
    pub pending: Option<PendingPreference>,
}

/// How a case reached the test file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Appended,
}

impl WriteOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Appended => "appended",
        }
    }
}

/// Resolves output locations and writes test files.
#[derive(Debug)]
pub struct TestFileStore<S: PreferenceStore> {
    prefs: OutputPreferences<S>,
    lock_dir: PathBuf,
    lock_timeout_ms: u64,
}

impl<S: PreferenceStore> TestFileStore<S> {
    /// `lock_dir` holds the per-target lock files.
    #[must_use]
    pub fn new(store: S, lock_dir: impl Into<PathBuf>) -> Self {
        Self {
            prefs: OutputPreferences::new(store),
            lock_dir: lock_dir.into(),
            lock_timeout_ms: DEFAULT_LOCK_TIMEOUT_MS,
        }
    }

    #[must_use]
    pub const fn with_lock_timeout(mut self, timeout_ms: u64) -> Self {
        self.lock_timeout_ms = timeout_ms;
        self
    }

    #[must_use]
    pub const fn preferences(&self) -> &OutputPreferences<S> {
        &self.prefs
    }

    /// Decide the directory the test file for `source` lives in.
    ///
    /// On first use the prompt is asked (relative answers are taken from the
    /// current directory) and a declined prompt falls back to the source's
    /// own directory; the choice comes back as a pending
    /// preference. Afterwards the remembered directory is used while the
    /// global flag is set.
    #[must_use]
    pub fn resolve_output_path(
        &self,
        source: &Path,
        prompt: &mut dyn FolderPrompt,
    ) -> ResolvedOutput {
        let source_key = source.to_string_lossy().into_owned();
        let source_dir = containing_dir(source);

        let Some(stored) = self.prefs.lookup(&source_key) else {
            let dir = prompt
                .choose_folder(source)
                .map_or(source_dir, |dir| std::path::absolute(&dir).unwrap_or(dir));
            tracing::debug!(source = %source_key, dir = %dir.display(), "first use, directory chosen");
            return ResolvedOutput {
                dir: dir.clone(),
                first_time: true,
                pending: Some(PendingPreference {
                    source_key,
                    directory: dir,
                }),
            };
        };

        let dir = match stored.directory {
            Some(dir) if stored.use_user_defined_path => dir,
            _ => source_dir,
        };
        tracing::debug!(source = %source_key, dir = %dir.display(), "using remembered directory");
        ResolvedOutput {
            dir,
            first_time: false,
            pending: None,
        }
    }

    /// Persist the pending preference of `resolved`, if any.
    ///
    /// # Errors
    /// Returns an error if the preference store cannot be saved.
    pub fn commit(&mut self, resolved: &ResolvedOutput) -> Result<()> {
        if let Some(pending) = &resolved.pending {
            self.prefs
                .remember(&pending.source_key, &pending.directory)?;
            tracing::debug!(source = %pending.source_key, "remembered output directory");
        }
        Ok(())
    }

    /// Create or replace `path` with `document`, all or nothing.
    ///
    /// # Errors
    /// Returns `FileWrite` if the file cannot be written.
    pub fn write_new(&self, path: &Path, document: &str) -> Result<()> {
        atomic_write(path, document.as_bytes())?;
        tracing::info!(path = %path.display(), "created test file");
        Ok(())
    }

    /// Insert `case_text` before the closing brace of the namespace in `path`.
    ///
    /// # Errors
    /// - `FileRead` if the file cannot be read.
    /// - `MalformedTestFile` if its braces do not allow a structural insert.
    /// - `FileWrite` if the result cannot be written back.
    pub fn append_case(&self, path: &Path, case_name: &str, case_text: &str) -> Result<()> {
        let text = fs::read_to_string(path).map_err(|source| ScaffoldError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        if case_names(&text).iter().any(|name| name == case_name) {
            tracing::warn!(path = %path.display(), case = case_name, "test case already exists, adding another");
        }

        let updated =
            insert_case(&text, case_text).map_err(|reason| ScaffoldError::MalformedTestFile {
                path: path.to_path_buf(),
                reason,
            })?;
        atomic_write(path, updated.as_bytes())?;
        tracing::info!(path = %path.display(), case = case_name, "appended test case");
        Ok(())
    }

    /// Write a case to `path`: a whole new document if the file does not
    /// exist, otherwise just the case.
    ///
    /// The check and the write happen under an exclusive lock on `path`.
    ///
    /// # Errors
    /// See [`TestFileStore::write_new`] and [`TestFileStore::append_case`];
    /// also `LockTimeout` if another writer holds the lock.
    pub fn write_case(
        &self,
        path: &Path,
        new_document: &str,
        case_name: &str,
        case_text: &str,
    ) -> Result<WriteOutcome> {
        let lock_path = lock_file_for(&self.lock_dir, path);
        let _guard = LockGuard::exclusive(&lock_path, self.lock_timeout_ms)?;

        if path.exists() {
            self.append_case(path, case_name, case_text)?;
            Ok(WriteOutcome::Appended)
        } else {
            self.write_new(path, new_document)?;
            Ok(WriteOutcome::Created)
        }
    }
}

#[cfg(test)]
#[path = "file_store_tests.rs"]
mod tests;
