//! Collect records from every log file in a set of directories.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::runlim::{self, Record};

/// Result of scanning a set of input directories.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    /// Records from all files, in processing order
    pub records: Vec<Record>,
    /// Files that were parsed, in processing order
    pub files: Vec<PathBuf>,
    /// Inputs skipped because they are not directories
    pub skipped: Vec<PathBuf>,
}

/// Progress notification emitted while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// About to parse this file.
    Processing(&'a Path),
    /// This input is not a directory and was skipped.
    Skipped(&'a Path),
}

/// Runs the log parser over directories of runlim logs.
///
/// Directories are handled in the order given; the regular files inside
/// each are parsed in file-name order, so the same inputs always produce
/// the same record order. Subdirectories are not descended into.
pub struct Aggregator<F = fn(Progress<'_>)> {
    on_progress: F,
}

impl Aggregator {
    /// Create an aggregator that reports progress only through `tracing`.
    pub fn new() -> Self {
        Self {
            on_progress: |_: Progress<'_>| {},
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FnMut(Progress<'_>)> Aggregator<F> {
    /// Create an aggregator that calls `on_progress` for every skipped
    /// input and before every parsed file.
    pub fn with_progress(on_progress: F) -> Self {
        Self { on_progress }
    }

    /// Scan `dirs` and concatenate every record found.
    ///
    /// Inputs that are not directories are skipped and listed in
    /// [`Aggregate::skipped`].
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be listed or a file cannot be
    /// read.
    pub fn run<P: AsRef<Path>>(&mut self, dirs: &[P]) -> Result<Aggregate> {
        let mut aggregate = Aggregate::default();

        for dir in dirs {
            let dir = dir.as_ref();
            if !dir.is_dir() {
                warn!(path = %dir.display(), "not a directory, skipping");
                (self.on_progress)(Progress::Skipped(dir));
                aggregate.skipped.push(dir.to_path_buf());
                continue;
            }

            for path in sorted_files(dir)? {
                (self.on_progress)(Progress::Processing(&path));
                info!(path = %path.display(), "processing file");
                let records = runlim::parse_file(&path)?;
                aggregate.records.extend(records);
                aggregate.files.push(path);
            }
        }

        Ok(aggregate)
    }
}

/// Regular files directly inside `dir`, sorted by file name.
fn sorted_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to list directory: {:?}", dir))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()
        .with_context(|| format!("Failed to read directory entry in {:?}", dir))?;

    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    entries.retain(|path| path.is_file());
    Ok(entries)
}
