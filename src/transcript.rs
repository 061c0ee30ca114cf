//! Split a command transcript into one file per executed command.
//!
//! The transcript is the console log of a batch driver that echoes each
//! command before running it and confirms it afterwards:
//!
//! ```text
//! Run command: ./solver inst42.cnf -seq
//! ...solver output...
//! Command executed successfully: inst42_seq.
//! ```
//!
//! Each such block becomes a [`CommandEntry`] whose text is saved as
//! `<stem>.txt`, the stem being the token after the confirmation.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

static COMMAND_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    // (?s) lets the lazy body span lines
    Regex::new(r"(?s)Run command:(.*?Command executed successfully:)(\s*(\S+))").unwrap()
});

/// One command block extracted from a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    /// Block text from after `Run command:` through the trailing token
    pub text: String,
    /// File stem: the trailing token without trailing periods
    pub stem: String,
}

impl CommandEntry {
    /// Name of the file this entry is saved to.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.stem)
    }
}

/// Extract every command block from a transcript, left to right.
///
/// Blocks do not overlap: each match resumes scanning after the previous
/// block's trailing token.
pub fn split_commands(transcript: &str) -> Vec<CommandEntry> {
    COMMAND_BLOCK_REGEX
        .captures_iter(transcript)
        .map(|caps| {
            let body = caps.get(1).map_or("", |m| m.as_str()).trim();
            let tail = caps.get(2).map_or("", |m| m.as_str()).trim();
            let token = caps.get(3).map_or("", |m| m.as_str()).trim();
            CommandEntry {
                text: format!("{} {}", body, tail),
                stem: token.trim_end_matches('.').to_string(),
            }
        })
        .collect()
}

/// Read a transcript file and extract its command blocks.
///
/// # Errors
///
/// Returns an error if the transcript cannot be read.
pub fn split_file<P: AsRef<Path>>(path: P) -> Result<Vec<CommandEntry>> {
    let path = path.as_ref();
    let transcript = fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript: {:?}", path))?;
    let entries = split_commands(&transcript);
    debug!(path = %path.display(), blocks = entries.len(), "split transcript");
    Ok(entries)
}

/// Write one entry to `<out_dir>/<stem>.txt`, overwriting any existing file.
///
/// Returns `None` without writing when the entry's stem is empty.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_command(entry: &CommandEntry, out_dir: &Path) -> Result<Option<PathBuf>> {
    if entry.stem.is_empty() {
        warn!(text = %entry.text, "command block has no usable file name, skipping");
        return Ok(None);
    }
    let path = out_dir.join(entry.file_name());
    fs::write(&path, &entry.text)
        .with_context(|| format!("Failed to write command file: {:?}", path))?;
    Ok(Some(path))
}

/// Write each entry to `<out_dir>/<stem>.txt` and return the written paths.
///
/// When two entries share a stem the later one wins. Entries whose stem is
/// empty are skipped.
///
/// # Errors
///
/// Returns an error if a file cannot be written.
pub fn write_commands(entries: &[CommandEntry], out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Some(path) = write_command(entry, out_dir)? {
            written.push(path);
        }
    }
    Ok(written)
}
