//! Single-pass parser turning one runlim log into report records.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::accumulator::ParseState;
use super::line::LineKind;
use super::types::Record;

/// Parse a runlim log file from a filesystem path.
///
/// The whole file is read before scanning. Invalid UTF-8 is replaced rather
/// than rejected, since solver output occasionally contains stray bytes.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("Failed to read log file: {:?}", path))?;
    let text = String::from_utf8_lossy(&bytes);
    let records = parse_str(&text);
    debug!(path = %path.display(), records = records.len(), "parsed log file");
    Ok(records)
}

/// Parse runlim log text.
///
/// Lines are trimmed and classified in order. Once the scan is done the
/// file's runlim totals are copied onto every record it produced, including
/// records completed before the totals were printed: one log is one
/// monitored invocation, so its resource totals are shared by all of its
/// result sections.
pub fn parse_str(text: &str) -> Vec<Record> {
    let mut state = ParseState::new();
    let mut records = Vec::new();

    for line in text.lines() {
        if let Some(kind) = LineKind::classify(line.trim()) {
            if let Some(record) = state.apply(kind) {
                records.push(record);
            }
        }
    }

    if state.sections() == 0 {
        debug!("log has no result section");
    }

    let totals = state.totals();
    for record in &mut records {
        record.apply_totals(totals);
    }
    records
}
