use std::fs;

use tempfile::TempDir;

use super::{generate_config_template, run_init_impl};
use crate::cli::InitArgs;
use crate::config::Config;

#[test]
fn generate_config_template_contains_sections() {
    let template = generate_config_template();
    assert!(template.contains("[naming]"));
    assert!(template.contains("[template]"));
    assert!(template.contains("[initializers]"));
    assert!(template.contains("[prompt]"));
}

#[test]
fn generate_config_template_matches_defaults() {
    let template = generate_config_template();
    let parsed: Config = toml::from_str(&template).unwrap();
    assert_eq!(parsed, Config::default());
    assert!(parsed.validate().is_ok());
}

#[test]
fn run_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".gtest-scaffold.toml");

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[naming]"));
}

#[test]
fn run_init_fails_if_file_exists() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".gtest-scaffold.toml");
    fs::write(&config_path, "existing").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    let err = run_init_impl(&args).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "existing");
}

#[test]
fn run_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".gtest-scaffold.toml");
    fs::write(&config_path, "existing").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: true,
    };

    run_init_impl(&args).unwrap();
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[template]"));
}

#[test]
fn run_init_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();
    assert!(config_path.exists());
}
