//! Where generated tests go and how they are written.
//!
//! [`TestFileStore`] resolves the output directory through the remembered
//! [`OutputPreferences`] and writes either a whole new test file or one more
//! case into an existing one.

mod document;
mod file_store;
mod output_prefs;
mod prefs;

pub use document::{case_names, insert_case, insertion_point};
pub use file_store::{PendingPreference, ResolvedOutput, TestFileStore, WriteOutcome};
pub use output_prefs::{
    OutputEntry, OutputPreferences, ROOT_COLLECTION, StoredOutput, USE_USER_DEFINED_PATH,
};
pub use prefs::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceDocument, PreferenceStore};
