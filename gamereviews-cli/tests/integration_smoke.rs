//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("gamereviews").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("gamereviews").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_check_without_database_url_fails() {
    let mut cmd = Command::cargo_bin("gamereviews").unwrap();
    cmd.env_remove("DATABASE_URL")
        .current_dir(std::env::temp_dir())
        .arg("check");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("gamereviews").unwrap();
    cmd.arg("frobnicate");

    cmd.assert().failure();
}
