use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gtest-scaffold")]
#[command(
    author,
    version,
    about = "Generate GoogleTest typed-test skeletons from C++ signatures"
)]
#[command(long_about = "Turns one line of a C++ source file holding a function signature \
    into a GoogleTest typed-test case in the companion test file.\n\n\
    Exit codes:\n  \
    0 - Test written\n  \
    1 - Input rejected (file type, selection or signature)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Preference file remembering output directories
    /// (default: preferences.json in the user data directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub prefs_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a test case for the function declared on one line
    Generate(GenerateArgs),

    /// Inspect remembered output directories
    Prefs(PrefsArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Args, Debug)]
#[command(group(
    clap::ArgGroup::new("selection")
        .required(true)
        .args(["line", "signature"]),
))]
pub struct GenerateArgs {
    /// C++ source file the function lives in
    pub source: PathBuf,

    /// 1-based line of SOURCE holding the signature
    #[arg(short, long, value_name = "N")]
    pub line: Option<usize>,

    /// Signature text to use instead of reading a line
    #[arg(short, long, value_name = "TEXT")]
    pub signature: Option<String>,

    /// Directory for the test file when SOURCE is seen for the first time
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Do not ask for a directory; use the source file's own
    #[arg(long, conflicts_with = "output_dir")]
    pub no_prompt: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print what would be written without touching any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct PrefsArgs {
    #[command(subcommand)]
    pub action: PrefsAction,
}

#[derive(Subcommand, Debug)]
pub enum PrefsAction {
    /// List every remembered source file and its output directory
    List {
        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show where the test for one source file would be written
    Show {
        /// C++ source file
        source: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".gtest-scaffold.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
