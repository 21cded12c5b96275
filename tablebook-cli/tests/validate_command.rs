//! Integration tests for the `validate` command.

mod common;

use common::{reservation_fields, TestEnv};
use predicates::prelude::*;

#[test]
fn test_validate_accepts_valid_reservation() {
    let env = TestEnv::new();
    env.command()
        .arg("validate")
        .args(reservation_fields("usename@example.com"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Reservation is valid"));
}

#[test]
fn test_validate_does_not_store() {
    let env = TestEnv::new();
    env.command()
        .arg("validate")
        .args(reservation_fields("usename@example.com"))
        .assert()
        .success();

    assert!(!env.database_path().exists());
}

#[test]
fn test_validate_reports_every_violation() {
    let env = TestEnv::new();
    env.command()
        .args([
            "validate", "--date", "June 10", "--time", "18:02", "--party", "0", "--name", " ",
            "--email", "username",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("name:"))
        .stdout(predicate::str::contains("email:"))
        .stdout(predicate::str::contains("date:"))
        .stdout(predicate::str::contains("time:"))
        .stdout(predicate::str::contains("party:"));
}

#[test]
fn test_validate_json_report() {
    let env = TestEnv::new();
    let output = env
        .command()
        .arg("validate")
        .args(reservation_fields("username"))
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valid"], false);
    assert_eq!(report["violations"][0]["field"], "email");
    assert_eq!(report["violations"].as_array().unwrap().len(), 1);
}

#[test]
fn test_validate_json_input_missing_name_reported() {
    let env = TestEnv::new();
    let output = env
        .command()
        .args(["validate", "--format", "json", "--json", "-"])
        .write_stdin(r#"{"date":"2017/06/10","time":"06:02 AM","party":4,"email":"usename@example.com"}"#)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valid"], false);
    assert_eq!(report["violations"][0]["field"], "name");
    assert_eq!(report["violations"].as_array().unwrap().len(), 1);
}

#[test]
fn test_validate_optional_fields_not_checked() {
    let env = TestEnv::new();
    env.command()
        .arg("validate")
        .args(reservation_fields("usename@example.com"))
        .args(["--phone", "not a number", "--message", ""])
        .assert()
        .success();
}
