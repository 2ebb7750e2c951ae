//! Integration tests for CLI argument handling
//!
//! Runs the built binary and asserts on help output and argument errors.
//! Commands that would reach the network are not invoked here; request
//! behavior is covered by the mock-server tests.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_eztravel"))
        .args(args)
        .output()
        .expect("Failed to execute eztravel")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("eztravel"), "Help should mention eztravel");
    assert!(stdout.contains("health"), "Help should list health");
    assert!(
        stdout.contains("itineraries"),
        "Help should list itineraries"
    );
    assert!(
        stdout.contains("reset-password"),
        "Help should list reset-password"
    );
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("eztravel"));
}

#[test]
fn test_missing_subcommand_fails_with_usage() {
    let output = run_cli(&[]);
    assert!(!output.status.success(), "Expected no-args run to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Usage") || stderr.contains("usage"),
        "Should print usage: {}",
        stderr
    );
}

#[test]
fn test_unknown_subcommand_fails() {
    let output = run_cli(&["teleport"]);
    assert!(!output.status.success());
}

#[test]
fn test_itineraries_help_lists_operations() {
    let output = run_cli(&["itineraries", "--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("list"));
    assert!(stdout.contains("create"));
    assert!(stdout.contains("delete"));
}

#[test]
fn test_itineraries_create_rejects_invalid_json_data() {
    let output = run_cli(&[
        "itineraries",
        "create",
        "--user",
        "3",
        "--title",
        "t",
        "--location",
        "l",
        "--days",
        "1",
        "--data",
        "{not json",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid JSON document"),
        "Should report the JSON parse failure: {}",
        stderr
    );
}

#[test]
fn test_itineraries_list_requires_user() {
    let output = run_cli(&["itineraries", "list"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("--user"),
        "Should mention the missing flag: {}",
        stderr
    );
}
