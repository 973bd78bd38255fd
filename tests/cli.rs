use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn invtrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("invtrack").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn cli_add_and_get() {
    let dir = TempDir::new().unwrap();

    invtrack(&dir).args(&["add", "apple", "10"]).assert().success();
    invtrack(&dir).args(&["add", "apple", "-3"]).assert().success();

    invtrack(&dir)
        .args(&["get", "apple"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn cli_get_absent_prints_zero() {
    let dir = TempDir::new().unwrap();

    invtrack(&dir)
        .args(&["get", "orange"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn cli_rm_absent_reports_not_found() {
    let dir = TempDir::new().unwrap();

    invtrack(&dir).args(&["add", "apple", "10"]).assert().success();

    invtrack(&dir)
        .args(&["rm", "orange", "1"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Not found"));
}

#[test]
fn cli_rm_clamps_to_removal() {
    let dir = TempDir::new().unwrap();

    invtrack(&dir).args(&["add", "apple", "3"]).assert().success();
    invtrack(&dir).args(&["rm", "apple", "100"]).assert().success();

    invtrack(&dir)
        .args(&["get", "apple"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn cli_low_stock_listing() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("inventory.json"),
        r#"{"apple": 10, "banana": 2, "mango": 0}"#,
    )
    .unwrap();

    invtrack(&dir)
        .arg("low")
        .assert()
        .success()
        .stdout("banana\nmango\n");

    invtrack(&dir)
        .args(&["low", "0"])
        .assert()
        .failure();
}

#[test]
fn cli_report_empty() {
    let dir = TempDir::new().unwrap();

    invtrack(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("(empty inventory)"));
}

#[test]
fn cli_state_persists_across_invocations() {
    let dir = TempDir::new().unwrap();

    invtrack(&dir).args(&["add", "apple", "10"]).assert().success();
    invtrack(&dir).args(&["add", "banana", "2"]).assert().success();
    invtrack(&dir).args(&["rm", "apple", "4"]).assert().success();

    invtrack(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("apple -> 6").and(predicate::str::contains("banana -> 2")));
}
