use std::fmt::Write;
use std::path::Path;

use crate::EXIT_SUCCESS;
use crate::cli::{Cli, PrefsAction, PrefsArgs};
use crate::error::Result;
use crate::host::DeclinedFolder;
use crate::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, PrefsReport, TextFormatter,
    print_error,
};
use crate::store::{PreferenceStore, StoredOutput, TestFileStore};
use crate::template::TestNaming;

use super::context::{exit_code_for, load_config, open_file_store, resolve_prefs_file};

#[must_use]
pub fn run_prefs(args: &PrefsArgs, cli: &Cli) -> i32 {
    match run_prefs_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(cli.color.into(), &e);
            exit_code_for(&e)
        }
    }
}

/// Runs a `prefs` subcommand and returns its rendered output.
///
/// # Errors
/// Returns an error if the preference file location is unknown or the
/// configuration cannot be loaded.
pub fn run_prefs_impl(args: &PrefsArgs, cli: &Cli) -> Result<String> {
    let prefs_file = resolve_prefs_file(cli.prefs_file.as_deref())?;
    let store = open_file_store(&prefs_file)?;

    match &args.action {
        PrefsAction::List { format } => {
            format_prefs_list(&store, &prefs_file, *format, cli.color.into())
        }
        PrefsAction::Show { source } => {
            let config = load_config(None, cli.no_config)?;
            let naming = TestNaming::from_config(&config.naming);
            show_source(&store, &naming, source)
        }
    }
}

/// Render every remembered directory.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn format_prefs_list<S: PreferenceStore>(
    store: &TestFileStore<S>,
    prefs_file: &Path,
    format: OutputFormat,
    color: ColorMode,
) -> Result<String> {
    let prefs = store.preferences();
    let report = PrefsReport {
        prefs_file: prefs_file.to_path_buf(),
        use_user_defined_path: prefs.use_user_defined_path(),
        entries: prefs.entries(),
    };
    let mut output = match format {
        OutputFormat::Text => TextFormatter::new(color).format(&report)?,
        OutputFormat::Json => JsonFormatter.format(&report)?,
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

/// Describe where the test for `source` goes, without prompting or writing.
///
/// # Errors
/// Returns an error if `source` cannot be made absolute.
pub fn show_source<S: PreferenceStore>(
    store: &TestFileStore<S>,
    naming: &TestNaming,
    source: &Path,
) -> Result<String> {
    let absolute = dunce::canonicalize(source).or_else(|_| std::path::absolute(source))?;
    let resolved = store.resolve_output_path(&absolute, &mut DeclinedFolder);
    let test_file = resolved
        .dir
        .join(naming.test_file_name(&absolute.to_string_lossy()));

    let stored = store.preferences().lookup(&absolute.to_string_lossy());
    let status = match stored {
        None => "not remembered yet, the directory is asked for on first generate",
        Some(StoredOutput {
            directory: Some(_),
            use_user_defined_path: true,
        }) => "remembered directory",
        Some(StoredOutput {
            directory: Some(_),
            use_user_defined_path: false,
        }) => "remembered, but remembered directories are off; using the source directory",
        Some(StoredOutput { directory: None, .. }) => {
            "remembered without a directory; using the source directory"
        }
    };

    let mut out = String::new();
    let _ = writeln!(out, "Source:    {}", absolute.display());
    let _ = writeln!(out, "Test file: {}", test_file.display());
    let _ = writeln!(out, "Status:    {status}");
    Ok(out)
}

#[cfg(test)]
#[path = "prefs_tests.rs"]
mod tests;
