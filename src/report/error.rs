//! Report writing errors.

use std::path::PathBuf;

/// Errors that can occur while writing or merging a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to access report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed report {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(
        "Existing report {path} has incompatible columns ({found}). Write to a new file or fix its header."
    )]
    SchemaMismatch { path: PathBuf, found: String },
}
