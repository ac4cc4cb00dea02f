//! Integration tests for init and config commands

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::planner_cmd;

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    planner_cmd().arg("init").arg(temp.path()).assert().success();

    // Check .planner directory exists
    assert!(temp.path().join(".planner").exists());

    // Check config.toml exists
    let config_path = temp.path().join(".planner/config.toml");
    assert!(config_path.exists());

    // Check config content
    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("api_url = \"http://localhost:3333\""));
    assert!(content.contains("owner_name"));
    assert!(content.contains("owner_email"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    // First init succeeds
    planner_cmd().arg("init").arg(temp.path()).assert().success();

    // Second init fails
    planner_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_config_get_api_url() {
    let temp = TempDir::new().unwrap();

    planner_cmd().arg("init").arg(temp.path()).assert().success();

    planner_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("api_url")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:3333"));
}

#[test]
fn test_config_set_api_url() {
    let temp = TempDir::new().unwrap();

    planner_cmd().arg("init").arg(temp.path()).assert().success();

    planner_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("api_url")
        .arg("https://planner.example.com")
        .assert()
        .success();

    planner_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("api_url")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://planner.example.com"));
}

#[test]
fn test_config_set_api_url_rejects_non_http() {
    let temp = TempDir::new().unwrap();

    planner_cmd().arg("init").arg(temp.path()).assert().success();

    planner_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("api_url")
        .arg("planner.example.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("http://"));
}

#[test]
fn test_config_set_owner_email_validates() {
    let temp = TempDir::new().unwrap();

    planner_cmd().arg("init").arg(temp.path()).assert().success();

    planner_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("owner_email")
        .arg("not-an-email")
        .assert()
        .failure()
        .stderr(predicate::str::contains("owner_email"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();

    planner_cmd().arg("init").arg(temp.path()).assert().success();

    planner_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("api_url"))
        .stdout(predicate::str::contains("owner_name"))
        .stdout(predicate::str::contains("owner_email"))
        .stdout(predicate::str::contains("created"));
}

#[test]
fn test_config_set_created_fails() {
    let temp = TempDir::new().unwrap();

    planner_cmd().arg("init").arg(temp.path()).assert().success();

    planner_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("created")
        .arg("2024-01-01T00:00:00Z")
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    planner_cmd().arg("init").arg(temp.path()).assert().success();

    planner_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("editor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_outside_planner_dir_fails() {
    let temp = TempDir::new().unwrap();

    planner_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("planner init"));
}

#[test]
fn test_planner_root_env_is_honored() {
    let temp = TempDir::new().unwrap();

    planner_cmd().arg("init").arg(temp.path()).assert().success();

    let elsewhere = TempDir::new().unwrap();

    planner_cmd()
        .current_dir(elsewhere.path())
        .env("PLANNER_ROOT", temp.path())
        .arg("config")
        .arg("api_url")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:3333"));
}
