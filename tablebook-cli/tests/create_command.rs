//! Integration tests for the `create` command.

mod common;

use std::fs;

use common::{reservation_fields, TestEnv};
use predicates::prelude::*;

#[test]
fn test_create_prints_first_id() {
    let env = TestEnv::new();
    assert_eq!(env.create_simple("Family"), 1);
    assert!(env.database_path().exists());
}

#[test]
fn test_create_ids_increase() {
    let env = TestEnv::new();
    let first = env.create_simple("first");
    let second = env.create_simple("second");
    let third = env.create_simple("third");

    assert!(first < second && second < third);
    assert_eq!(env.count_reservations(), 3);
}

#[test]
fn test_create_json_output() {
    let env = TestEnv::new();
    let output = env
        .command()
        .arg("create")
        .args(reservation_fields("usename@example.com"))
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["id"], 1);
}

#[test]
fn test_create_json_output_from_config() {
    let env = TestEnv::new();
    env.write_config("output_format: json\n");

    env.command()
        .arg("create")
        .args(reservation_fields("usename@example.com"))
        .assert()
        .success()
        .stdout(predicate::str::contains("{\"id\":1}"));
}

#[test]
fn test_create_with_optional_fields() {
    let env = TestEnv::new();
    env.command()
        .arg("create")
        .args(reservation_fields("usename@example.com"))
        .args(["--phone", "555-0100", "--message", "Birthday"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(env.database_path()).unwrap();
    let (phone, message): (String, String) = conn
        .query_row("SELECT phone, message FROM reservations", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .unwrap();
    assert_eq!(phone, "555-0100");
    assert_eq!(message, "Birthday");
}

#[test]
fn test_create_invalid_email_exits_one() {
    let env = TestEnv::new();
    env.command()
        .arg("create")
        .args(reservation_fields("username"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("email"));

    assert_eq!(env.count_reservations(), 0);
}

#[test]
fn test_create_from_json_file() {
    let env = TestEnv::new();
    let input = env.path().join("reservation.json");
    fs::write(
        &input,
        r#"{"date":"2017/06/10","time":"06:02 AM","party":4,"name":"Family","email":"usename@example.com"}"#,
    )
    .unwrap();

    env.command()
        .arg("create")
        .arg("--json")
        .arg(&input)
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_create_keeps_additional_json_fields() {
    let env = TestEnv::new();
    env.command()
        .args(["create", "--json", "-"])
        .write_stdin(
            r#"{"date":"2017/06/10","time":"06:02 AM","party":4,"name":"Family",
                "email":"usename@example.com","notes":"high chair"}"#,
        )
        .assert()
        .success()
        .stdout("1\n");

    let conn = rusqlite::Connection::open(env.database_path()).unwrap();
    let extra: String = conn
        .query_row("SELECT extra FROM reservations WHERE id = 1", [], |row| {
            row.get(0)
        })
        .unwrap();
    let extra: serde_json::Value = serde_json::from_str(&extra).unwrap();
    assert_eq!(extra["notes"], "high chair");
}

#[test]
fn test_create_json_missing_name_exits_one() {
    let env = TestEnv::new();
    env.command()
        .args(["create", "--json", "-"])
        .write_stdin(r#"{"date":"2017/06/10","time":"06:02 AM","party":4,"email":"usename@example.com"}"#)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("name"));

    assert_eq!(env.count_reservations(), 0);
}

#[test]
fn test_create_from_stdin_null_exits_one() {
    let env = TestEnv::new();
    env.command()
        .args(["create", "--json", "-"])
        .write_stdin("null")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn test_create_malformed_json_exits_four() {
    let env = TestEnv::new();
    env.command()
        .args(["create", "--json", "-"])
        .write_stdin("{not json")
        .assert()
        .code(4);
}

#[test]
fn test_create_with_disable_autoinit_exits_three() {
    let env = TestEnv::new();
    env.command()
        .arg("--disable-autoinit")
        .arg("create")
        .args(reservation_fields("usename@example.com"))
        .assert()
        .code(3);

    assert!(!env.database_path().exists());
}

#[test]
fn test_create_after_init_with_disable_autoinit() {
    let env = TestEnv::new();
    env.command().arg("init").assert().success();

    env.command()
        .arg("--disable-autoinit")
        .arg("create")
        .args(reservation_fields("usename@example.com"))
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_create_with_invalid_config_exits_seven() {
    let env = TestEnv::new();
    env.write_config("maximum_lock_wait_seconds: 0\n");

    env.command()
        .arg("create")
        .args(reservation_fields("usename@example.com"))
        .assert()
        .code(7);
}

#[test]
fn test_create_uses_env_data_dir() {
    let env = TestEnv::new();
    env.command_bare()
        .env("TABLEBOOK_DATA_DIR", &env.data_dir)
        .arg("create")
        .args(reservation_fields("usename@example.com"))
        .assert()
        .success();

    assert!(env.database_path().exists());
}
