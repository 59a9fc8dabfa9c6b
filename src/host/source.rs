use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// The file being edited and the line the user pointed at.
pub trait SourceContext {
    /// Path of the active source file.
    ///
    /// # Errors
    /// Returns `NoActiveDocument` if there is none.
    fn source_path(&self) -> Result<&Path>;

    /// Text of the selected line, without its line terminator.
    ///
    /// # Errors
    /// Returns `EmptySelection` if no line is selected and `FileRead` if the
    /// source cannot be read.
    fn selected_line(&self) -> Result<String>;
}

/// How the command line picked the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// 1-based line number in the source file.
    Line(usize),
    /// Signature text given directly.
    Text(String),
}

/// [`SourceContext`] built from command-line arguments.
#[derive(Debug, Clone)]
pub struct CliSourceContext {
    source: Option<PathBuf>,
    selection: Selection,
}

impl CliSourceContext {
    #[must_use]
    pub const fn new(source: Option<PathBuf>, selection: Selection) -> Self {
        Self { source, selection }
    }
}

impl SourceContext for CliSourceContext {
    fn source_path(&self) -> Result<&Path> {
        self.source
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(ScaffoldError::NoActiveDocument)
    }

    fn selected_line(&self) -> Result<String> {
        match &self.selection {
            Selection::Text(text) => Ok(text.clone()),
            Selection::Line(0) => Err(ScaffoldError::EmptySelection),
            Selection::Line(number) => {
                let path = self.source_path()?;
                let content =
                    fs::read_to_string(path).map_err(|source| ScaffoldError::FileRead {
                        path: path.to_path_buf(),
                        source,
                    })?;
                // Past the end of the file nothing is selected.
                Ok(content
                    .lines()
                    .nth(number - 1)
                    .map(|line| line.trim_end_matches('\r').to_string())
                    .unwrap_or_default())
            }
        }
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
