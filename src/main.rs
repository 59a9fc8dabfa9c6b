use clap::Parser;
use tracing_subscriber::EnvFilter;

use gtest_scaffold::cli::{Cli, Commands};
use gtest_scaffold::commands::{run_generate, run_init, run_prefs};

/// Environment variable overriding the log filter, e.g. `gtest_scaffold=trace`.
const LOG_ENV: &str = "GTEST_SCAFFOLD_LOG";

fn init_tracing(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    // stdout is reserved for command output.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let exit_code = match &cli.command {
        Commands::Generate(args) => run_generate(args, &cli),
        Commands::Prefs(args) => run_prefs(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
    };

    std::process::exit(exit_code);
}
