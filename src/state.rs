//! State file locations, file locking and atomic writes.
//!
//! Per-user state (the output-directory preferences and the lock files that
//! serialize writes) lives in the platform data directory, e.g.
//! `~/.local/share/gtest-scaffold/` on Linux. An explicit preference file
//! path moves all of it next to that file instead.

use std::fs::{self, File, OpenOptions, TryLockError};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use sha2::{Digest, Sha256};

use crate::error::{Result, ScaffoldError};

const PREFS_FILENAME: &str = "preferences.json";
const LOCKS_DIR_NAME: &str = "locks";

/// Default lock timeout in milliseconds.
pub const DEFAULT_LOCK_TIMEOUT_MS: u64 = 5000;

/// Polling interval for lock acquisition in milliseconds.
const LOCK_POLL_INTERVAL_MS: u64 = 50;

/// Platform data directory for gtest-scaffold, if the home directory is known.
#[must_use]
pub fn default_state_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "gtest-scaffold")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

/// Preference file inside a state directory.
#[must_use]
pub fn prefs_path(state_dir: &Path) -> PathBuf {
    state_dir.join(PREFS_FILENAME)
}

/// Directory holding lock files, next to the preference file.
#[must_use]
pub fn lock_dir_for(prefs_file: &Path) -> PathBuf {
    prefs_file
        .parent()
        .map_or_else(|| PathBuf::from(LOCKS_DIR_NAME), |dir| dir.join(LOCKS_DIR_NAME))
}

/// Lock file guarding writes to `target`.
///
/// Named by a hash of the target path so that the user's source tree is not
/// littered with lock files.
#[must_use]
pub fn lock_file_for(lock_dir: &Path, target: &Path) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(target.to_string_lossy().as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    lock_dir.join(format!("{}.lock", &digest[..16]))
}

/// Ensure the parent directory exists for a given path.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

// =============================================================================
// File Locking Utilities
// =============================================================================

/// Error type for lock acquisition failures.
#[derive(Debug)]
pub enum LockError {
    /// Lock acquisition timed out.
    Timeout,
    /// I/O error during lock operation.
    Io(io::Error),
}

impl From<io::Error> for LockError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl std::fmt::Display for LockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "lock acquisition timed out"),
            Self::Io(e) => write!(f, "lock I/O error: {e}"),
        }
    }
}

impl std::error::Error for LockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Timeout => None,
            Self::Io(e) => Some(e),
        }
    }
}

/// Try to acquire an exclusive (write) lock on the file with timeout.
///
/// # Errors
/// - `LockError::Timeout` if lock cannot be acquired within `timeout_ms`
/// - `LockError::Io` for other I/O errors
pub fn try_lock_exclusive_with_timeout(
    file: &File,
    timeout_ms: u64,
) -> std::result::Result<(), LockError> {
    poll_lock(timeout_ms, || file.try_lock())
}

/// Try to acquire a shared (read) lock on the file with timeout.
///
/// # Errors
/// - `LockError::Timeout` if lock cannot be acquired within `timeout_ms`
/// - `LockError::Io` for other I/O errors
pub fn try_lock_shared_with_timeout(
    file: &File,
    timeout_ms: u64,
) -> std::result::Result<(), LockError> {
    poll_lock(timeout_ms, || file.try_lock_shared())
}

fn poll_lock(
    timeout_ms: u64,
    mut try_lock: impl FnMut() -> std::result::Result<(), TryLockError>,
) -> std::result::Result<(), LockError> {
    let start = Instant::now();
    let timeout = Duration::from_millis(timeout_ms);
    let poll_interval = Duration::from_millis(LOCK_POLL_INTERVAL_MS);

    loop {
        match try_lock() {
            Ok(()) => return Ok(()),
            Err(TryLockError::WouldBlock) => {
                if start.elapsed() >= timeout {
                    return Err(LockError::Timeout);
                }
                thread::sleep(poll_interval);
            }
            Err(TryLockError::Error(e)) => return Err(LockError::Io(e)),
        }
    }
}

/// Unlock a file, releasing any held lock.
///
/// Errors are silently ignored as unlock failures are non-critical.
pub fn unlock_file(file: &File) {
    let _ = file.unlock();
}

/// Holds a lock on a dedicated lock file until dropped.
#[derive(Debug)]
pub struct LockGuard {
    file: File,
}

impl LockGuard {
    /// Acquire an exclusive lock on `lock_path`, creating it if needed.
    ///
    /// # Errors
    /// `LockTimeout` if another holder keeps the lock past `timeout_ms`,
    /// `FileWrite` if the lock file cannot be created.
    pub fn exclusive(lock_path: &Path, timeout_ms: u64) -> Result<Self> {
        Self::acquire(lock_path, timeout_ms, try_lock_exclusive_with_timeout)
    }

    /// Acquire a shared lock on `lock_path`, creating it if needed.
    ///
    /// # Errors
    /// Same as [`LockGuard::exclusive`].
    pub fn shared(lock_path: &Path, timeout_ms: u64) -> Result<Self> {
        Self::acquire(lock_path, timeout_ms, try_lock_shared_with_timeout)
    }

    fn acquire(
        lock_path: &Path,
        timeout_ms: u64,
        lock: fn(&File, u64) -> std::result::Result<(), LockError>,
    ) -> Result<Self> {
        let write_err = |source| ScaffoldError::FileWrite {
            path: lock_path.to_path_buf(),
            source,
        };
        ensure_parent_dir(lock_path).map_err(write_err)?;
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(lock_path)
            .map_err(write_err)?;

        match lock(&file, timeout_ms) {
            Ok(()) => Ok(Self { file }),
            Err(LockError::Timeout) => Err(ScaffoldError::LockTimeout {
                path: lock_path.to_path_buf(),
            }),
            Err(LockError::Io(source)) => Err(write_err(source)),
        }
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        unlock_file(&self.file);
    }
}

// =============================================================================
// Atomic Write
// =============================================================================

/// Replace `path` with `content` all-or-nothing.
///
/// Writes to a temporary sibling, syncs it, then renames over the target.
/// On any failure the temporary file is removed and the target is untouched.
/// Callers that read-modify-write must hold a [`LockGuard`] around the whole
/// sequence; this function does no locking itself.
///
/// # Errors
/// Returns `FileWrite` if the temp file cannot be written or renamed.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let write_err = |source| ScaffoldError::FileWrite {
        path: path.to_path_buf(),
        source,
    };
    ensure_parent_dir(path).map_err(write_err)?;

    let tmp_path = temp_sibling(path);
    let result = write_and_sync(&tmp_path, content).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(source) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_err(source));
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| "out".into(), |n| n.to_string_lossy());
    path.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}

fn write_and_sync(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
