// Integration tests for the ridematch CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and argument validation.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the ridematch binary.
fn ridematch() -> Command {
    Command::cargo_bin("ridematch").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    ridematch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ridematch"));
}

#[test]
fn cli_help_flag() {
    ridematch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scooter recommender"));
}

#[test]
fn recommend_requires_answers() {
    ridematch()
        .arg("recommend")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn explain_requires_item() {
    ridematch()
        .args(["explain", "--answers", "answers.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn recommend_rejects_zero_top() {
    ridematch()
        .args(["recommend", "--answers", "a.toml", "--top", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn recommend_rejects_top_with_all() {
    ridematch()
        .args(["recommend", "--answers", "a.toml", "--top", "2", "--all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    ridematch()
        .args(["-q", "-v", "catalog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
