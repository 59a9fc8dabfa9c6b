use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Asks where tests for a source file should be written.
///
/// Only consulted the first time a source file is seen.
pub trait FolderPrompt {
    /// The chosen directory, or `None` if the user declined.
    fn choose_folder(&mut self, source: &Path) -> Option<PathBuf>;
}

/// Always answers with the same directory (`--output-dir`).
#[derive(Debug, Clone)]
pub struct FixedFolder(pub PathBuf);

impl FolderPrompt for FixedFolder {
    fn choose_folder(&mut self, _source: &Path) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// Always declines, so the source file's own directory is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclinedFolder;

impl FolderPrompt for DeclinedFolder {
    fn choose_folder(&mut self, _source: &Path) -> Option<PathBuf> {
        None
    }
}

/// Reads a directory from a line of input. An empty answer declines.
#[derive(Debug)]
pub struct InteractiveFolderPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveFolderPrompt<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl InteractiveFolderPrompt<io::StdinLock<'static>, io::Stderr> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> FolderPrompt for InteractiveFolderPrompt<R, W> {
    fn choose_folder(&mut self, source: &Path) -> Option<PathBuf> {
        let _ = write!(
            self.output,
            "Directory for tests of {} (empty = next to the source): ",
            source.display()
        );
        let _ = self.output.flush();

        let mut answer = String::new();
        if let Err(e) = self.input.read_line(&mut answer) {
            tracing::warn!(error = %e, "failed to read folder answer, using source directory");
            return None;
        }
        let answer = answer.trim();
        if answer.is_empty() {
            None
        } else {
            Some(PathBuf::from(answer))
        }
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
