//! Integration tests for trip commands that never reach the backend:
//! form validation failures and the no-current-trip paths.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::planner_cmd;

fn init_planner() -> TempDir {
    let temp = TempDir::new().unwrap();
    planner_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_create_requires_both_dates() {
    let temp = init_planner();

    planner_cmd()
        .current_dir(temp.path())
        .args([
            "create",
            "--destination",
            "Paris",
            "--day",
            "2024-03-12",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("both trip dates"));
}

#[test]
fn test_create_rejects_short_destination() {
    let temp = init_planner();

    planner_cmd()
        .current_dir(temp.path())
        .args([
            "create",
            "--destination",
            "Rio",
            "--day",
            "2024-03-12",
            "--day",
            "2024-03-18",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("at least 4 characters"));
}

#[test]
fn test_create_rejects_malformed_date() {
    let temp = init_planner();

    planner_cmd()
        .current_dir(temp.path())
        .args([
            "create",
            "--destination",
            "Paris",
            "--day",
            "12-03-2024",
            "--day",
            "2024-03-18",
        ])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_create_rejects_invalid_invite_email() {
    let temp = init_planner();

    planner_cmd()
        .current_dir(temp.path())
        .args([
            "create",
            "--destination",
            "Paris",
            "--day",
            "2024-03-12",
            "--day",
            "2024-03-18",
            "--invite",
            "not-an-email",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Invalid guest email"));
}

#[test]
fn test_create_rejects_duplicate_invite() {
    let temp = init_planner();

    planner_cmd()
        .current_dir(temp.path())
        .args([
            "create",
            "--destination",
            "Paris",
            "--day",
            "2024-03-12",
            "--day",
            "2024-03-18",
            "--invite",
            "ana@example.com",
            "--invite",
            "ANA@example.com",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("already invited"));
}

#[test]
fn test_show_without_current_trip_fails() {
    let temp = init_planner();

    planner_cmd()
        .current_dir(temp.path())
        .args(["trip", "show"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("planner create"));
}

#[test]
fn test_update_without_current_trip_fails() {
    let temp = init_planner();

    planner_cmd()
        .current_dir(temp.path())
        .args(["trip", "update", "--destination", "Lisbon"])
        .assert()
        .failure()
        .code(5);
}

#[test]
fn test_forget_without_current_trip() {
    let temp = init_planner();

    planner_cmd()
        .current_dir(temp.path())
        .args(["trip", "forget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No current trip to forget"));
}

#[test]
fn test_forget_clears_stored_trip() {
    let temp = init_planner();

    fs::write(temp.path().join(".planner/trip"), "trip-123").unwrap();

    planner_cmd()
        .current_dir(temp.path())
        .args(["trip", "forget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current trip forgotten"));

    assert!(!temp.path().join(".planner/trip").exists());
}

#[test]
fn test_trip_commands_outside_planner_dir_fail() {
    let temp = TempDir::new().unwrap();

    planner_cmd()
        .current_dir(temp.path())
        .args(["trip", "show"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not a planner directory"));
}
