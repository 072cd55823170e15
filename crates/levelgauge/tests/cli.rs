//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Write `body` into a fresh temp dir and return (guard, file path).
fn content_file(body: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.txt");
    std::fs::write(&path, body).unwrap();
    (dir, path)
}

const SIMPLE_ENGLISH: &str =
    "I am a student. I go to school. My friend is nice. We study together.";

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("grade"));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Grade Command
// =============================================================================

#[test]
fn grade_assigns_a_cet_level() {
    let (dir, path) = content_file(SIMPLE_ENGLISH);
    cmd()
        .current_dir(dir.path())
        .args(["grade", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Level:"))
        .stdout(predicate::str::contains("CET-"));
}

#[test]
fn grade_json_is_machine_readable() {
    let (dir, path) = content_file(SIMPLE_ENGLISH);
    let output = cmd()
        .current_dir(dir.path())
        .args(["--json", "grade", path.to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let assigned = parsed["assigned_level"].as_str().unwrap();
    assert!(assigned.starts_with("CET-"), "unexpected level {assigned}");
    assert!(parsed["confidence_score"].as_f64().unwrap() >= 0.3);
    assert_eq!(parsed["level_scores"].as_object().unwrap().len(), 3);
}

#[test]
fn grade_japanese_uses_jlpt_levels() {
    let (dir, path) = content_file("わたしは がくせいです。まいにち がっこうへ いきます。");
    let output = cmd()
        .current_dir(dir.path())
        .args([
            "--json",
            "grade",
            path.to_str().unwrap(),
            "--language",
            "japanese",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(parsed["assigned_level"].as_str().unwrap().starts_with('N'));
    assert_eq!(parsed["level_scores"].as_object().unwrap().len(), 5);
}

#[test]
fn grade_missing_file_fails() {
    cmd()
        .args(["grade", "no-such-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Metrics Command
// =============================================================================

#[test]
fn metrics_lists_all_eight() {
    let (dir, path) = content_file(SIMPLE_ENGLISH);
    cmd()
        .current_dir(dir.path())
        .args(["metrics", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("vocabulary_appropriateness"))
        .stdout(predicate::str::contains("engagement_factor"));
}

// =============================================================================
// Vocab Command
// =============================================================================

#[test]
fn vocab_extracts_structured_definitions() {
    let (dir, path) = content_file(
        "perseverance - continuing to try despite difficulty\n\
         resilience - the ability to recover quickly from setbacks",
    );
    let output = cmd()
        .current_dir(dir.path())
        .args(["--json", "vocab", path.to_str().unwrap(), "--level", "CET-4"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["word"], "perseverance");
    assert_eq!(items[0]["level"], "CET-4");
}

// =============================================================================
// Validate Command
// =============================================================================

#[test]
fn validate_rejects_cross_family_target() {
    let (dir, path) = content_file(SIMPLE_ENGLISH);
    let output = cmd()
        .current_dir(dir.path())
        .args([
            "--json",
            "validate",
            path.to_str().unwrap(),
            "--target",
            "N5",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["fit"].as_f64().unwrap(), 0.0);
}

#[test]
fn validate_reports_in_family_fit() {
    let (dir, path) = content_file(SIMPLE_ENGLISH);
    cmd()
        .current_dir(dir.path())
        .args(["validate", path.to_str().unwrap(), "--target", "CET-4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fits CET-4"));
}
