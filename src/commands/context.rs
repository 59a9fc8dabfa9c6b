//! Setup shared by every command: configuration, preference file and exit codes.

use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{Result, ScaffoldError};
use crate::state::{default_state_dir, lock_dir_for, prefs_path};
use crate::store::{JsonPreferenceStore, TestFileStore};
use crate::{EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR};

/// Load configuration the way every command does.
///
/// # Errors
/// Returns an error if the config file cannot be read or is invalid.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// The preference file to use: the explicit one, else the per-user default.
///
/// # Errors
/// Returns `HostUnavailable` if no explicit path is given and the user's data
/// directory cannot be determined.
pub fn resolve_prefs_file(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    default_state_dir()
        .map(|dir| prefs_path(&dir))
        .ok_or_else(|| {
            ScaffoldError::HostUnavailable(
                "Cannot determine the user data directory for preferences".to_string(),
            )
        })
}

/// A [`TestFileStore`] backed by the preference file at `prefs_file`.
///
/// # Errors
/// Returns `LockTimeout` if the preference file stays locked.
pub fn open_file_store(prefs_file: &Path) -> Result<TestFileStore<JsonPreferenceStore>> {
    let store = JsonPreferenceStore::open(prefs_file)?;
    Ok(TestFileStore::new(store, lock_dir_for(prefs_file)))
}

/// Exit code for a failed command.
#[must_use]
pub const fn exit_code_for(err: &ScaffoldError) -> i32 {
    if err.is_input_error() {
        EXIT_INPUT_ERROR
    } else {
        EXIT_CONFIG_ERROR
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
