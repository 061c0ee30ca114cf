//! Command handlers for the SLX CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod extract;
pub mod split;

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Split `extract` positionals into input directories and the report path.
///
/// The report path is always the last argument.
pub fn split_inputs(paths: &[PathBuf]) -> Result<(&[PathBuf], &Path)> {
    match paths.split_last() {
        Some((output, dirs)) if !dirs.is_empty() => Ok((dirs, output.as_path())),
        _ => bail!("Expected at least one log directory followed by an output path"),
    }
}
