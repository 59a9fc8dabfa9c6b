#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the gtest-scaffold binary.
#[macro_export]
macro_rules! gtest_scaffold {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("gtest-scaffold"))
    };
}

/// A C++ source with a few declarations, one per line.
pub const CALCULATOR_SOURCE: &str = "#include \"Calculator.h\"

int Calculator::Add(int a, int b)
{
    return a + b;
}

void Calculator::Reset()
{
}

std::wstring Calculator::Describe(const std::string& prefix, wstring suffix)
{
    return L\"\";
}
";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Preference file kept inside the fixture.
    pub fn prefs_file(&self) -> PathBuf {
        self.dir.path().join("state").join("preferences.json")
    }

    /// Reads a file relative to the fixture root.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Base command: fixture as cwd, isolated preferences, no colors and a
    /// non-terminal stdin.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = gtest_scaffold!();
        cmd.current_dir(self.path())
            .env_remove("GTEST_SCAFFOLD_LOG")
            .arg("--color")
            .arg("never")
            .arg("--prefs-file")
            .arg(self.prefs_file())
            .write_stdin("");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
