//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to the directory of sample runlim logs
pub fn logs_dir() -> PathBuf {
    fixtures_dir().join("logs")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Load one of the sample runlim logs
pub fn load_log(name: &str) -> String {
    load_fixture(&format!("logs/{}", name))
}

/// Create a temporary directory holding copies of the named sample logs
pub fn temp_log_dir(names: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for name in names {
        fs::write(temp_dir.path().join(name), load_log(name)).expect("Failed to write temp log");
    }
    temp_dir
}

/// Command for the slx binary with an isolated HOME, so no user config is read
pub fn slx_cmd(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("slx").expect("slx binary not built");
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a config file into an isolated HOME
pub fn write_config(home: &TempDir, contents: &str) {
    let dir = home.path().join(".config").join("slx");
    fs::create_dir_all(&dir).expect("Failed to create config dir");
    fs::write(dir.join("config.toml"), contents).expect("Failed to write config");
}
