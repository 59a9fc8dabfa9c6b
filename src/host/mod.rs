//! Collaborators supplied by whatever hosts the generator.
//!
//! [`SourceContext`] says which file and line to work on; [`FolderPrompt`]
//! asks where tests for a new source file should go.

mod prompt;
mod source;

pub use prompt::{DeclinedFolder, FixedFolder, FolderPrompt, InteractiveFolderPrompt};
pub use source::{CliSourceContext, Selection, SourceContext};
