//! Integration tests for activity, link and guest commands: local
//! validation and missing-trip paths (nothing here talks to a backend).

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

fn init_planner_with_trip() -> TempDir {
    let temp = init_planner();
    fs::write(temp.path().join(".planner/trip"), "trip-123").unwrap();
    temp
}

#[test]
fn test_activity_add_without_current_trip_fails() {
    let temp = init_planner();

    planner_cmd()
        .current_dir(temp.path())
        .args([
            "activity", "add", "--title", "Museum tour", "--day", "2024-03-12", "--hour", "10",
        ])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("No trip is currently selected"));
}

#[test]
fn test_activity_add_rejects_blank_title() {
    let temp = init_planner_with_trip();

    planner_cmd()
        .current_dir(temp.path())
        .args([
            "activity", "add", "--title", "  ", "--day", "2024-03-12", "--hour", "10",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("activity title"));
}

#[test]
fn test_activity_add_rejects_out_of_range_hour() {
    let temp = init_planner_with_trip();

    planner_cmd()
        .current_dir(temp.path())
        .args([
            "activity", "add", "--title", "Museum tour", "--day", "2024-03-12", "--hour", "24",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("between 0 and 23"));
}

#[test]
fn test_activity_add_rejects_malformed_date() {
    let temp = init_planner_with_trip();

    planner_cmd()
        .current_dir(temp.path())
        .args([
            "activity", "add", "--title", "Museum tour", "--day", "someday", "--hour", "10",
        ])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_link_add_without_current_trip_fails() {
    let temp = init_planner();

    planner_cmd()
        .current_dir(temp.path())
        .args([
            "link",
            "add",
            "--title",
            "Hotel booking",
            "--url",
            "https://example.com",
        ])
        .assert()
        .failure()
        .code(5);
}

#[test]
fn test_link_add_rejects_blank_title() {
    let temp = init_planner_with_trip();

    planner_cmd()
        .current_dir(temp.path())
        .args(["link", "add", "--title", " ", "--url", "https://example.com"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("link title"));
}

#[test]
fn test_link_add_rejects_invalid_url() {
    let temp = init_planner_with_trip();

    planner_cmd()
        .current_dir(temp.path())
        .args(["link", "add", "--title", "Hotel", "--url", "example.com"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Invalid link URL"));
}

#[test]
fn test_guest_list_without_current_trip_fails() {
    let temp = init_planner();

    planner_cmd()
        .current_dir(temp.path())
        .args(["guest", "list"])
        .assert()
        .failure()
        .code(5);
}

#[test]
fn test_guest_confirm_requires_name() {
    let temp = init_planner();

    planner_cmd()
        .current_dir(temp.path())
        .args([
            "guest",
            "confirm",
            "trip-123",
            "--participant",
            "p-1",
            "--name",
            "  ",
            "--email",
            "ana@example.com",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("full name"));
}

#[test]
fn test_guest_confirm_rejects_invalid_email() {
    let temp = init_planner();

    planner_cmd()
        .current_dir(temp.path())
        .args([
            "guest",
            "confirm",
            "trip-123",
            "--participant",
            "p-1",
            "--name",
            "Ana Souza",
            "--email",
            "nope",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Invalid confirmation email"));
}
