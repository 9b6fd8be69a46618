//! Integration tests for the hikeplan CLI.
//!
//! These tests stay offline: `render` never calls a provider and `plan`
//! is only exercised up to argument and configuration validation.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::tempdir;

const CONFIG_VARS: &[&str] = &[
    "HIKEPLAN_TRAIL_API_KEY",
    "HIKEPLAN_WEATHER_API_KEY",
    "HIKEPLAN_COGNITO_POOL_ID",
    "HIKEPLAN_COGNITO_MANAGER_ID",
    "HIKEPLAN_COGNITO_MANAGER_KEY",
    "HIKEPLAN_TRAIL_BASE_URL",
    "HIKEPLAN_WEATHER_BASE_URL",
    "HIKEPLAN_AWS_REGION",
    "HIKEPLAN_MAIL_SENDER",
    "HIKEPLAN_HTTP_TIMEOUT_SECS",
];

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
        .canonicalize()
        .expect("fixture present")
}

/// A command with no hikeplan configuration in its environment.
fn clean_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("hikeplan-cli");
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_lists_subcommands() {
    clean_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("plan"))
        .stdout(contains("render"));
}

#[test]
fn render_valid_event_prints_request() {
    clean_cmd()
        .arg("render")
        .arg("--event")
        .arg(fixture("event_valid.json"))
        .assert()
        .success()
        .stdout(contains("7003603"))
        .stdout(contains("2023-06-01"));
}

#[test]
fn render_valid_event_as_json() {
    let output = clean_cmd()
        .args(["--format", "json", "render", "--event"])
        .arg(fixture("event_valid.json"))
        .output()
        .expect("run render");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["trail_id"], "7003603");
    assert_eq!(value["start_date"], "2023-06-01");
}

#[test]
fn render_rejects_event_without_username() {
    clean_cmd()
        .arg("render")
        .arg("--event")
        .arg(fixture("event_missing_username.json"))
        .assert()
        .failure()
        .stdout(contains("\"statusCode\": 502"))
        .stdout(contains("Error occured in request parameter processing"));
}

#[test]
fn render_rejects_malformed_event_file() {
    let temp_dir = tempdir().expect("create temp dir");
    let path = temp_dir.path().join("event.json");
    fs::write(&path, "{ not json").expect("write event");

    clean_cmd()
        .arg("render")
        .arg("--event")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("is not valid JSON"));
}

#[test]
fn render_rejects_invalid_start_date() {
    let temp_dir = tempdir().expect("create temp dir");
    let path = temp_dir.path().join("event.json");
    let event = serde_json::json!({
        "httpMethod": "POST",
        "body": r#"{"StartDate":"June 1st","TrailId":"7003603","Username":"alice"}"#,
    });
    fs::write(&path, event.to_string()).expect("write event");

    clean_cmd()
        .arg("render")
        .arg("--event")
        .arg(&path)
        .assert()
        .failure()
        .stdout(contains("StartDate"));
}

#[test]
fn plan_without_configuration_fails() {
    clean_cmd()
        .args([
            "plan",
            "--trail-id",
            "7003603",
            "--start-date",
            "2023-06-01",
            "--username",
            "alice",
            "--dry-run",
        ])
        .assert()
        .failure()
        .stderr(contains("HIKEPLAN_TRAIL_API_KEY"));
}

#[test]
fn plan_rejects_invalid_date_before_loading_configuration() {
    clean_cmd()
        .args([
            "plan",
            "--trail-id",
            "7003603",
            "--start-date",
            "2023-13-45",
            "--username",
            "alice",
        ])
        .assert()
        .failure()
        .stderr(contains("invalid plan arguments"))
        .stderr(contains("HIKEPLAN_TRAIL_API_KEY").not());
}

#[test]
fn plan_requires_username() {
    clean_cmd()
        .args(["plan", "--trail-id", "7003603", "--start-date", "2023-06-01"])
        .assert()
        .failure()
        .stderr(contains("--username"));
}
