use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::EXIT_SUCCESS;
use crate::cli::{Cli, GenerateArgs};
use crate::config::Config;
use crate::error::{Result, ScaffoldError};
use crate::host::{
    CliSourceContext, DeclinedFolder, FixedFolder, FolderPrompt, InteractiveFolderPrompt,
    Selection, SourceContext,
};
use crate::output::print_error;
use crate::signature::{ArgumentBinder, SignatureParser};
use crate::store::{PreferenceStore, TestFileStore, WriteOutcome};
use crate::template::{CASE_PREFIX, TestNaming, TestTemplateBuilder};

use super::context::{exit_code_for, load_config, open_file_store, resolve_prefs_file};

/// What one generation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub test_file: PathBuf,
    pub case_name: String,
    /// `None` for a dry run.
    pub outcome: Option<WriteOutcome>,
    /// The text written (or that would be): a whole document for a new file,
    /// otherwise the single case.
    pub content: String,
    pub first_time: bool,
}

#[must_use]
pub fn run_generate(args: &GenerateArgs, cli: &Cli) -> i32 {
    match run_generate_impl(args, cli) {
        Ok(report) => {
            print_report(&report, cli.quiet);
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(cli.color.into(), &e);
            exit_code_for(&e)
        }
    }
}

/// Generates a test case from the command line.
///
/// # Errors
/// Returns an error if the input is rejected or the test file cannot be written.
pub fn run_generate_impl(args: &GenerateArgs, cli: &Cli) -> Result<GenerationReport> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let prefs_file = resolve_prefs_file(cli.prefs_file.as_deref())?;
    let mut store = open_file_store(&prefs_file)?;

    let selection = match (args.line, &args.signature) {
        (Some(number), _) => Selection::Line(number),
        (None, Some(text)) => Selection::Text(text.clone()),
        (None, None) => Selection::Line(0),
    };
    let context = CliSourceContext::new(Some(args.source.clone()), selection);
    let mut prompt = choose_prompt(args, &config);

    generate_test(
        &context,
        prompt.as_mut(),
        &mut store,
        &config,
        args.dry_run,
    )
}

fn choose_prompt(args: &GenerateArgs, config: &Config) -> Box<dyn FolderPrompt> {
    if let Some(dir) = &args.output_dir {
        return Box::new(FixedFolder(dir.clone()));
    }
    let interactive = config.prompt.interactive
        && !args.no_prompt
        && !args.dry_run
        && std::io::stdin().is_terminal();
    if interactive {
        Box::new(InteractiveFolderPrompt::stdio())
    } else {
        Box::new(DeclinedFolder)
    }
}

fn print_report(report: &GenerationReport, quiet: bool) {
    match report.outcome {
        None => print!("{}", report.content),
        Some(_) if quiet => {}
        Some(outcome) => println!(
            "{} {}: {}",
            outcome.as_str(),
            report.case_name,
            report.test_file.display()
        ),
    }
}

/// Source path used as the preference key.
fn absolute_source(source: &Path) -> Result<PathBuf> {
    match dunce::canonicalize(source) {
        Ok(path) => Ok(path),
        // A signature given as text does not need the file to exist.
        Err(_) => Ok(std::path::absolute(source)?),
    }
}

/// Parse the selected line, build the test text and write it.
///
/// The remembered output directory is only persisted after the test file was
/// written, so a failed run leaves the preferences untouched. A dry run
/// writes nothing and persists nothing.
///
/// # Errors
/// - `NoActiveDocument`, `UnsupportedFileType`, `EmptySelection` or
///   `InvalidSignature` when the input is rejected.
/// - `FileRead`, `FileWrite`, `MalformedTestFile` or `LockTimeout` when the
///   test file cannot be updated.
pub fn generate_test<S: PreferenceStore>(
    context: &dyn SourceContext,
    prompt: &mut dyn FolderPrompt,
    store: &mut TestFileStore<S>,
    config: &Config,
    dry_run: bool,
) -> Result<GenerationReport> {
    let source = context.source_path()?;
    let source_name = source.to_string_lossy();
    let naming = TestNaming::from_config(&config.naming);
    if !naming.is_source_file(&source_name) {
        return Err(ScaffoldError::UnsupportedFileType {
            path: source.to_path_buf(),
            expected: naming.source_extension().to_string(),
        });
    }

    let line = context.selected_line()?;
    let signature = SignatureParser::new().parse(&line)?;
    let args = ArgumentBinder::new(config.initializers.clone()).bind(&signature.args_raw);
    tracing::debug!(name = %signature.name, args = args.len(), "parsed signature");

    let header = naming.header_file_name(&source_name);
    let class_name = naming.test_class_name(&header);
    let method = signature.unqualified_name();
    let case_name = format!("{CASE_PREFIX}{method}");

    let builder = TestTemplateBuilder::new(config.template.clone());
    let document = builder.build_document(&header, &class_name, method, &args);
    let case_text = builder.build_case(&class_name, method, &args);

    let absolute = absolute_source(source)?;
    let resolved = store.resolve_output_path(&absolute, prompt);
    let test_file = resolved.dir.join(naming.test_file_name(&source_name));

    if dry_run {
        let content = if test_file.exists() { case_text } else { document };
        return Ok(GenerationReport {
            test_file,
            case_name,
            outcome: None,
            content,
            first_time: resolved.first_time,
        });
    }

    let outcome = store.write_case(&test_file, &document, &case_name, &case_text)?;
    store.commit(&resolved)?;

    let content = match outcome {
        WriteOutcome::Created => document,
        WriteOutcome::Appended => case_text,
    };
    Ok(GenerationReport {
        test_file,
        case_name,
        outcome: Some(outcome),
        content,
        first_time: resolved.first_time,
    })
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
