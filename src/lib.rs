//! Generate GoogleTest typed-test skeletons from one line of C++ source.
//!
//! The pipeline is [`signature::SignatureParser`] →
//! [`signature::ArgumentBinder`] → [`template::TestTemplateBuilder`] →
//! [`store::TestFileStore`], wired together by
//! [`commands::generate_test`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod host;
pub mod output;
pub mod path_utils;
pub mod signature;
pub mod state;
pub mod store;
pub mod template;

pub use error::{Result, ScaffoldError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INPUT_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
