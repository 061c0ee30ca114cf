//! `slx config` end-to-end tests

use super::helpers::{slx_cmd, write_config};

use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn show_prints_defaults_without_a_file() {
    let home = TempDir::new().unwrap();
    slx_cmd(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("merge = \"header-row\""))
        .stdout(predicate::str::contains("transcript = \"temp.txt\""));
}

#[test]
fn show_reflects_config_file() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[report]\nmerge = \"append-records\"\n");
    slx_cmd(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("merge = \"append-records\""));
}

#[test]
fn path_notes_missing_file() {
    let home = TempDir::new().unwrap();
    slx_cmd(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains("not created"));
}

#[test]
fn malformed_config_is_an_error() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[report\n");
    slx_cmd(&home)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}
