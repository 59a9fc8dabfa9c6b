pub mod context;
pub mod generate;
pub mod init;
pub mod prefs;

pub use generate::{GenerationReport, generate_test, run_generate, run_generate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use prefs::{format_prefs_list, run_prefs, run_prefs_impl, show_source};
