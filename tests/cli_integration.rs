//! CLI Integration Tests
//!
//! These tests cover the paths of `valentine-desktop` that finish without
//! opening a window: help output and `--print-config`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a command whose default config directory is an empty temp dir
fn desktop_cmd(config_home: &TempDir) -> Command {
    let mut cmd =
        Command::cargo_bin("valentine-desktop").expect("Failed to find valentine-desktop binary");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help
// ============================================================================

#[test]
fn test_help_lists_options() {
    let home = TempDir::new().unwrap();

    desktop_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--print-config"));
}

// ============================================================================
// Print Config
// ============================================================================

#[test]
fn test_print_default_config() {
    let home = TempDir::new().unwrap();

    desktop_cmd(&home)
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Will you be my Valentine?"))
        .stdout(predicate::str::contains("\"evasion_range\": 100.0"));
}

#[test]
fn test_print_explicit_config() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("card.json");
    std::fs::write(&path, r#"{ "question": "Dinner on Friday?" }"#).unwrap();

    desktop_cmd(&home)
        .arg("--config")
        .arg(&path)
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dinner on Friday?"))
        .stdout(predicate::str::contains("Ask Again"));
}

#[test]
fn test_config_dir_file_is_picked_up() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("valentine");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("card.json"), r#"{ "reset_label": "One more time" }"#).unwrap();

    desktop_cmd(&home)
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("One more time"));
}

#[test]
fn test_invalid_config_fails() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.json");
    std::fs::write(&path, r#"{ "evasion_range": -1 }"#).unwrap();

    desktop_cmd(&home)
        .arg("--config")
        .arg(&path)
        .arg("--print-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load card config"));
}

#[test]
fn test_missing_config_fails() {
    let home = TempDir::new().unwrap();

    desktop_cmd(&home)
        .arg("--config")
        .arg(home.path().join("nope.json"))
        .arg("--print-config")
        .assert()
        .failure();
}
