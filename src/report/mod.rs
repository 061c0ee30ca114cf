//! Tabular experiment reports.
//!
//! Reports are CSV files with one header row of [`COLUMN_TITLES`] followed by
//! one row per [`Record`](crate::runlim::Record).
//!
//! - `writer` - Creating a report or merging into an existing one
//! - `error` - Report-specific failure modes

mod error;
mod writer;

pub use error::ReportError;
pub use writer::{to_csv_string, write_to, ReportWriter, WriteOutcome};

pub use crate::runlim::COLUMN_TITLES;

use serde::{Deserialize, Serialize};
use std::fmt;

/// What to add when the report file already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    /// Append a single row holding the column titles; new records are not
    /// written. This is what existing report pipelines expect.
    #[default]
    HeaderRow,
    /// Append the newly extracted records below the existing rows.
    AppendRecords,
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergePolicy::HeaderRow => write!(f, "header-row"),
            MergePolicy::AppendRecords => write!(f, "append-records"),
        }
    }
}
