use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};
use crate::signature::default_initializers;

static NAMESPACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$").expect("Invalid regex")
});

/// How source, header and test files are named.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamingConfig {
    /// Extension of files the generator accepts (without the dot).
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Extension of the paired header included by the test file.
    #[serde(default = "default_header_extension")]
    pub header_extension: String,

    /// Appended to the header stem for the fixture class and to the source
    /// stem for the test file name.
    #[serde(default = "default_test_suffix")]
    pub test_suffix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            source_extension: default_source_extension(),
            header_extension: default_header_extension(),
            test_suffix: default_test_suffix(),
        }
    }
}

/// Contents of the generated preamble.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateConfig {
    /// Includes emitted before the paired header, in order.
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,

    /// Namespace wrapping the fixture and every case.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Base clause of the fixture class.
    #[serde(default = "default_base_class")]
    pub base_class: String,

    /// Type list of the typed test suite.
    #[serde(default = "default_type_list")]
    pub type_list: String,

    /// Emit compilable suite/assertion syntax instead of the historical form.
    #[serde(default)]
    pub strict_syntax: bool,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            includes: default_includes(),
            namespace: default_namespace(),
            base_class: default_base_class(),
            type_list: default_type_list(),
            strict_syntax: false,
        }
    }
}

/// Folder prompt behaviour on first use for a source file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptConfig {
    /// Ask for an output directory when stdin is a terminal (default: true).
    #[serde(default = "default_true")]
    pub interactive: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self { interactive: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub template: TemplateConfig,

    /// Type name → literal used to initialize locals of that type.
    #[serde(default = "default_initializers")]
    pub initializers: IndexMap<String, String>,

    #[serde(default)]
    pub prompt: PromptConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            naming: NamingConfig::default(),
            template: TemplateConfig::default(),
            initializers: default_initializers(),
            prompt: PromptConfig::default(),
        }
    }
}

impl Config {
    /// Check values that would otherwise produce broken output.
    ///
    /// # Errors
    /// Returns `Config` describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        for (field, ext) in [
            ("naming.source_extension", &self.naming.source_extension),
            ("naming.header_extension", &self.naming.header_extension),
        ] {
            if ext.is_empty() || ext.contains(['.', '/', '\\']) {
                return Err(ScaffoldError::Config(format!(
                    "{field} must be a bare extension like \"cpp\", got {ext:?}"
                )));
            }
        }

        if self.naming.test_suffix.is_empty() {
            return Err(ScaffoldError::Config(
                "naming.test_suffix must not be empty: the test file would replace the source"
                    .to_string(),
            ));
        }

        if !NAMESPACE_PATTERN.is_match(&self.template.namespace) {
            return Err(ScaffoldError::Config(format!(
                "template.namespace is not a valid C++ namespace: {:?}",
                self.template.namespace
            )));
        }

        if let Some(ty) = self.initializers.keys().find(|ty| ty.trim().is_empty()) {
            return Err(ScaffoldError::Config(format!(
                "initializers contains an empty type name: {ty:?}"
            )));
        }

        Ok(())
    }
}

fn default_source_extension() -> String {
    "cpp".to_string()
}

fn default_header_extension() -> String {
    "h".to_string()
}

fn default_test_suffix() -> String {
    "Test".to_string()
}

fn default_includes() -> Vec<String> {
    ["pch.h", "iostream", "gtest/gtest.h", "gmock/gmock.h"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_namespace() -> String {
    "unittest".to_string()
}

fn default_base_class() -> String {
    "public testing::Test".to_string()
}

fn default_type_list() -> String {
    "bool".to_string()
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
