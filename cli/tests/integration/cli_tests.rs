//! Integration tests for argument parsing and the offline commands.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dpkctl() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dpkctl"));
    cmd.env("NO_COLOR", "1")
        .env_remove("DTLPY_TOKEN")
        .env_remove("DTLPY_ENV")
        .env_remove("DTLPY_BASE_URL");
    cmd
}

// --- Help and version ---

#[test]
fn no_args_shows_help_and_exits_two() {
    dpkctl().assert().code(2).stderr(predicate::str::contains(
        "Publish and install platform app packages",
    ));
}

#[test]
fn help_lists_commands() {
    dpkctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("whoami"));
}

#[test]
fn install_help_shows_project_id_flag() {
    dpkctl()
        .args(["install", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--project_id"));
}

#[test]
fn version_command_shows_version() {
    dpkctl()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "dpkctl ",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn version_command_json_is_valid() {
    let out = dpkctl()
        .args(["version", "--json"])
        .output()
        .expect("run dpkctl");
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(v["version"], env!("CARGO_PKG_VERSION"));
}

// --- NO_COLOR convention ---

#[test]
fn no_color_set_to_one_is_not_a_usage_error() {
    dpkctl()
        .env("NO_COLOR", "1")
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dpkctl"));
}

#[test]
fn no_color_with_any_value_still_reaches_the_command() {
    let dir = TempDir::new().expect("temp dir");
    dpkctl()
        .current_dir(dir.path())
        .env("NO_COLOR", "yes")
        .arg("whoami")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("DTLPY_TOKEN"));
}

// --- Usage errors ---

#[test]
fn install_without_project_id_is_a_usage_error() {
    dpkctl()
        .arg("install")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--project_id"));
}

#[test]
fn unknown_env_is_a_usage_error() {
    dpkctl()
        .args(["whoami", "--env", "staging"])
        .assert()
        .code(2);
}

// --- Local failures ---

#[test]
fn whoami_without_token_fails() {
    let dir = TempDir::new().expect("temp dir");
    dpkctl()
        .current_dir(dir.path())
        .arg("whoami")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("DTLPY_TOKEN"));
}

#[test]
fn install_with_blank_project_id_fails_before_network() {
    let dir = TempDir::new().expect("temp dir");
    let manifest = dir.path().join("dataloop.json");
    std::fs::write(&manifest, r#"{"name":"pkg"}"#).expect("write manifest");
    dpkctl()
        .current_dir(dir.path())
        .env("DTLPY_TOKEN", "t")
        // Port 9 (discard) is never served; a request would fail differently.
        .env("DTLPY_BASE_URL", "http://127.0.0.1:9")
        .args(["install", "--project_id", " "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Project ID must not be empty"));
}

#[test]
fn json_errors_are_json() {
    let dir = TempDir::new().expect("temp dir");
    let out = dpkctl()
        .current_dir(dir.path())
        .args(["whoami", "--json"])
        .output()
        .expect("run dpkctl");
    assert_eq!(out.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(v["error"], true);
    assert_eq!(v["code"], "ERROR");
}
