//! Tests for the `pd` binary's one-shot commands

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `pd` with logs, config lookup and cwd confined to a temp dir
fn pd(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pd").expect("pd binary not built");
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_DATA_HOME", temp.path().join("data"))
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_plan_command_prints_steps() {
    let temp = TempDir::new().unwrap();

    pd(&temp)
        .args(["plan", "Develop website", "-C", "Budget limit of $5000", "--context", "Q4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan for: Develop website"))
        .stdout(predicate::str::contains("plan-1"))
        .stdout(predicate::str::contains("4. Address constraint: Budget limit of $5000"))
        .stdout(predicate::str::contains("Notes: Context: Q4"));
}

#[test]
fn test_plan_command_with_clarification() {
    let temp = TempDir::new().unwrap();

    pd(&temp)
        .args(["plan", "Build a mobile app", "--detail", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Detailed Steps"))
        .stdout(predicate::str::contains("Depends on steps: 1"))
        .stdout(predicate::str::contains("Timeline may be affected by external factors."));
}

#[test]
fn test_plan_command_json() {
    let temp = TempDir::new().unwrap();

    let output = pd(&temp)
        .args(["plan", "Ship", "--format", "json", "--detail", "low"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["plan"]["id"], "plan-1");
    assert_eq!(value["plan"]["steps"].as_array().map(|s| s.len()), Some(3));
    assert_eq!(value["plan"]["steps"][1]["stepNumber"], 2);
    assert_eq!(value["clarification"]["nextSteps"].as_array().map(|s| s.len()), Some(2));
}

#[test]
fn test_blank_objective_fails() {
    let temp = TempDir::new().unwrap();

    pd(&temp)
        .args(["plan", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Objective is required"));
}

#[test]
fn test_info_command() {
    let temp = TempDir::new().unwrap();

    pd(&temp)
        .args(["info", "JavaScript", "-s", "ES6", "-s", "Promises"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary about JavaScript"))
        .stdout(predicate::str::contains("including subtopics: ES6, Promises"))
        .stdout(predicate::str::contains("https://example.com/reference2"));
}

#[test]
fn test_info_respects_local_config() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".plandesk.yml"), "show-references: false\n").unwrap();

    pd(&temp)
        .args(["info", "Rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("References:").not());
}

#[test]
fn test_empty_topic_fails() {
    let temp = TempDir::new().unwrap();

    pd(&temp)
        .args(["info", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Topic is required"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();

    pd(&temp)
        .args(["--config", "nope.yml", "info", "Rust"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
