//! Integration tests for the `prefs` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

fn generate_into(fixture: &TestFixture, source: &str, out_dir: &str) {
    fixture
        .command()
        .args([
            "--no-config",
            "generate",
            source,
            "-s",
            "void Run()",
            "--output-dir",
            out_dir,
        ])
        .assert()
        .success();
}

#[test]
fn prefs_list_empty() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["prefs", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No output directories remembered yet."));
}

#[test]
fn prefs_list_after_generate() {
    let fixture = TestFixture::new();
    fixture.create_file("src/Foo.cpp", "");
    generate_into(&fixture, "src/Foo.cpp", "unit");

    fixture
        .command()
        .args(["prefs", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Foo.cpp"))
        .stdout(predicate::str::contains("unit"))
        .stdout(predicate::str::contains("1 source file(s)"));
}

#[test]
fn prefs_list_json() {
    let fixture = TestFixture::new();
    fixture.create_file("A.cpp", "");
    fixture.create_file("B.cpp", "");
    generate_into(&fixture, "A.cpp", "a");
    generate_into(&fixture, "B.cpp", "b");

    let output = fixture
        .command()
        .args(["prefs", "list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["use_user_defined_path"], true);
    let entries = parsed["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    let dir = |i: usize| std::path::PathBuf::from(entries[i]["directory"].as_str().unwrap());
    assert!(dir(0).is_absolute());
    assert!(dir(0).ends_with("a"));
    assert!(dir(1).ends_with("b"));
}

#[test]
fn prefs_show_before_and_after_generate() {
    let fixture = TestFixture::new();
    fixture.create_file("Foo.cpp", "");

    fixture
        .command()
        .args(["--no-config", "prefs", "show", "Foo.cpp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FooTest.cpp"))
        .stdout(predicate::str::contains("not remembered yet"));

    generate_into(&fixture, "Foo.cpp", "tests");

    fixture
        .command()
        .args(["--no-config", "prefs", "show", "Foo.cpp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status:    remembered"));
}

#[test]
fn prefs_list_ignores_corrupted_file() {
    let fixture = TestFixture::new();
    fixture.create_file("state/preferences.json", "{ definitely not json");

    fixture
        .command()
        .args(["prefs", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No output directories remembered yet."));
}
