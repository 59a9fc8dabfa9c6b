use crate::config::NamingConfig;
use crate::path_utils::{file_name, split_extension};

/// Derives header, fixture and test file names from a source path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestNaming {
    source_extension: String,
    header_extension: String,
    test_suffix: String,
}

impl Default for TestNaming {
    fn default() -> Self {
        Self::from_config(&NamingConfig::default())
    }
}

impl TestNaming {
    #[must_use]
    pub fn from_config(config: &NamingConfig) -> Self {
        Self {
            source_extension: config.source_extension.clone(),
            header_extension: config.header_extension.clone(),
            test_suffix: config.test_suffix.clone(),
        }
    }

    #[must_use]
    pub fn source_extension(&self) -> &str {
        &self.source_extension
    }

    /// Whether `source` has the configured source extension (case-sensitive).
    #[must_use]
    pub fn is_source_file(&self, source: &str) -> bool {
        split_extension(file_name(source)).1 == Some(self.source_extension.as_str())
    }

    /// `C:\proj\Foo.cpp` → `Foo.h`.
    #[must_use]
    pub fn header_file_name(&self, source: &str) -> String {
        let (stem, _) = split_extension(file_name(source));
        format!("{stem}.{}", self.header_extension)
    }

    /// `Foo.h` → `FooTest`.
    #[must_use]
    pub fn test_class_name(&self, header_file_name: &str) -> String {
        let (stem, _) = split_extension(file_name(header_file_name));
        format!("{stem}{}", self.test_suffix)
    }

    /// `C:\proj\Foo.cpp` → `FooTest.cpp`.
    #[must_use]
    pub fn test_file_name(&self, source: &str) -> String {
        let (stem, _) = split_extension(file_name(source));
        format!("{stem}{}.{}", self.test_suffix, self.source_extension)
    }
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
