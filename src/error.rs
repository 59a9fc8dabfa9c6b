use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Templates are created only for .{expected} files: {path}")]
    UnsupportedFileType { path: PathBuf, expected: String },

    #[error("No source file given")]
    NoActiveDocument,

    #[error("Selected line is empty")]
    EmptySelection,

    #[error("Invalid method signature: {line}")]
    InvalidSignature { line: String, reason: &'static str },

    #[error("Host environment unavailable: {0}")]
    HostUnavailable(String),

    #[error("Test file is not in the generated layout: {path}")]
    MalformedTestFile { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Timed out waiting for lock on {path}")]
    LockTimeout { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScaffoldError {
    /// Short category label used as the first token of rendered errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::UnsupportedFileType { .. } => "UnsupportedFileType",
            Self::NoActiveDocument => "NoActiveDocument",
            Self::EmptySelection => "EmptySelection",
            Self::InvalidSignature { .. } => "InvalidSignature",
            Self::HostUnavailable(_) => "HostUnavailable",
            Self::MalformedTestFile { .. } => "MalformedTestFile",
            Self::FileRead { .. } => "FileRead",
            Self::FileWrite { .. } => "FileWrite",
            Self::LockTimeout { .. } => "LockTimeout",
            Self::Config(_) => "Config",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::Json(_) => "Json",
        }
    }

    /// The primary message, without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnsupportedFileType { expected, .. } => {
                format!("Sorry! Templates are created only for .{expected} files")
            }
            Self::NoActiveDocument => "No source file to generate a test for".to_string(),
            Self::EmptySelection => {
                "Select the method name for which you want to create a test".to_string()
            }
            Self::InvalidSignature { .. } => {
                "Select a valid method name for which you want to create a test".to_string()
            }
            Self::HostUnavailable(msg) | Self::Config(msg) => msg.clone(),
            Self::MalformedTestFile { path, .. }
            | Self::FileRead { path, .. }
            | Self::FileWrite { path, .. }
            | Self::LockTimeout { path } => path.display().to_string(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::Json(e) => e.to_string(),
        }
    }

    /// Extra context shown under the message, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::UnsupportedFileType { path, .. } => Some(path.display().to_string()),
            Self::InvalidSignature { line, reason } => Some(format!("{reason}: `{line}`")),
            Self::MalformedTestFile { reason, .. } => Some(reason.clone()),
            Self::FileRead { source, .. } | Self::FileWrite { source, .. } => {
                Some(format!("{}: {source}", source.kind()))
            }
            Self::TomlParse(e) => e.span().map(|span| format!("at bytes {span:?}")),
            _ => None,
        }
    }

    /// An actionable hint for the user, if one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::UnsupportedFileType { .. } => {
                Some("Run the command on the implementation file, not the header".to_string())
            }
            Self::NoActiveDocument => Some("Pass the source file path as the first argument".to_string()),
            Self::EmptySelection => {
                Some("Point --line at the line holding the function declaration".to_string())
            }
            Self::InvalidSignature { .. } => Some(
                "The line must contain `(` followed later by `)`, e.g. `int Add(int a, int b)`"
                    .to_string(),
            ),
            Self::HostUnavailable(_) => {
                Some("Pass --prefs-file to store output directory choices explicitly".to_string())
            }
            Self::MalformedTestFile { .. } => Some(
                "The test file must end with the closing brace of its namespace block".to_string(),
            ),
            Self::FileRead { source, .. } | Self::FileWrite { source, .. } => {
                match source.kind() {
                    std::io::ErrorKind::NotFound => {
                        Some("Check that the file path exists".to_string())
                    }
                    std::io::ErrorKind::PermissionDenied => {
                        Some("Check file permissions".to_string())
                    }
                    _ => None,
                }
            }
            Self::LockTimeout { .. } => {
                Some("Another gtest-scaffold process is writing; retry shortly".to_string())
            }
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format against `gtest-scaffold init`".to_string())
            }
            Self::Io(_) | Self::Json(_) => None,
        }
    }

    /// Whether the error was caused by the user's input rather than the environment.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFileType { .. }
                | Self::NoActiveDocument
                | Self::EmptySelection
                | Self::InvalidSignature { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
