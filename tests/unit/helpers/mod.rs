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
