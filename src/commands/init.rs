use crate::EXIT_SUCCESS;
use crate::cli::{Cli, InitArgs};
use crate::error::{Result, ScaffoldError};
use crate::output::{print_error, print_warning};
use crate::state::atomic_write;

use super::context::exit_code_for;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    if args.force && args.output.exists() && !cli.quiet {
        print_warning(
            cli.color.into(),
            &format!("Overwriting {}", args.output.display()),
            None,
        );
    }

    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(cli.color.into(), &e);
            exit_code_for(&e)
        }
    }
}

/// Writes the default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ScaffoldError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    atomic_write(output_path, generate_config_template().as_bytes())?;
    tracing::info!(path = %output_path.display(), "wrote configuration file");
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# gtest-scaffold configuration file
# Looked up as .gtest-scaffold.toml in the current directory, then as
# config.toml in the user configuration directory.

[naming]
# Only files with this extension are accepted (default: "cpp")
source_extension = "cpp"

# Extension of the header included by the test file (default: "h")
header_extension = "h"

# Appended to the header stem for the fixture class and to the source stem
# for the test file: Foo.cpp -> FooTest.cpp, class FooTest (default: "Test")
test_suffix = "Test"

[template]
# Included, in order, before the paired header
includes = ["pch.h", "iostream", "gtest/gtest.h", "gmock/gmock.h"]

# Namespace wrapping the fixture and every case (default: "unittest")
namespace = "unittest"

# Base clause of the fixture class
base_class = "public testing::Test"

# Types the typed test suite runs over
type_list = "bool"

# Emit `using X Types`, `TYPED_TEST_SUITE(X, XTypes)` and `EXPECT_EQ`
# instead of the historical run-together forms (default: false)
strict_syntax = false

# Literal used to initialize locals of a given type. Types are matched
# exactly; anything not listed is left default-constructed.
[initializers]
int = "0"
DWORD = "0"
string = '""'
wstring = 'L""'

[prompt]
# Ask for the output directory the first time a source file is seen,
# when stdin is a terminal (default: true)
interactive = true
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
