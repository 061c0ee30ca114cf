//! Report creation and merging.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{debug, info};

use super::{MergePolicy, ReportError, COLUMN_TITLES};
use crate::runlim::Record;

/// What a [`ReportWriter::write`] call did to the report file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// A new report was written with this many data rows.
    Created { rows: usize },
    /// An existing report was extended by this many rows.
    Merged {
        policy: MergePolicy,
        rows_appended: usize,
    },
}

/// Writes extracted records to a CSV report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportWriter {
    policy: MergePolicy,
}

impl ReportWriter {
    pub fn new(policy: MergePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Write `records` to the report at `path`.
    ///
    /// A missing report is created with the header and every record. An
    /// existing report must carry exactly the expected header; it is then
    /// extended according to the merge policy and rewritten in place.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::SchemaMismatch`] if an existing report has
    /// different columns, and I/O or CSV errors otherwise.
    pub fn write(&self, path: &Path, records: &[Record]) -> Result<WriteOutcome, ReportError> {
        if path.exists() {
            return self.merge(path, records);
        }

        let rows = replace_file(path, |file| write_to(file, records).map(|()| records.len()))?;
        info!(path = %path.display(), rows, "report created");
        Ok(WriteOutcome::Created { rows })
    }

    fn merge(&self, path: &Path, records: &[Record]) -> Result<WriteOutcome, ReportError> {
        let (headers, rows) = read_existing(path).map_err(|source| ReportError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if !headers.iter().eq(COLUMN_TITLES.iter().copied()) {
            return Err(ReportError::SchemaMismatch {
                path: path.to_path_buf(),
                found: headers.iter().collect::<Vec<_>>().join(", "),
            });
        }
        debug!(path = %path.display(), existing_rows = rows.len(), "merging into report");

        let rows_appended = replace_file(path, |file| {
            write_merged(file, &headers, &rows, self.policy, records)
        })?;

        info!(
            path = %path.display(),
            policy = %self.policy,
            rows_appended,
            "report merged"
        );
        Ok(WriteOutcome::Merged {
            policy: self.policy,
            rows_appended,
        })
    }
}

/// Fill `<path>.tmp` and rename it over `path`.
///
/// On failure the temporary file is removed and `path` is left as it was,
/// so a report on disk is always a complete table.
fn replace_file<F>(path: &Path, fill: F) -> Result<usize, ReportError>
where
    F: FnOnce(fs::File) -> Result<usize, csv::Error>,
{
    let temp_path = temp_path_for(path);
    let file = fs::File::create(&temp_path).map_err(|source| ReportError::Io {
        path: temp_path.clone(),
        source,
    })?;

    let rows = match fill(file) {
        Ok(rows) => rows,
        Err(source) => {
            let _ = fs::remove_file(&temp_path);
            return Err(ReportError::Csv {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if let Err(source) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(ReportError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(rows)
}

/// Write the existing table followed by the rows the merge policy adds.
///
/// Returns the number of rows added.
fn write_merged<W: Write>(
    writer: W,
    headers: &StringRecord,
    rows: &[StringRecord],
    policy: MergePolicy,
    records: &[Record],
) -> Result<usize, csv::Error> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    let appended = match policy {
        MergePolicy::HeaderRow => {
            writer.write_record(COLUMN_TITLES)?;
            1
        }
        MergePolicy::AppendRecords => {
            for record in records {
                writer.serialize(record)?;
            }
            records.len()
        }
    };
    writer.flush()?;
    Ok(appended)
}

/// Write a complete report (header plus records) to any writer.
pub fn write_to<W: Write>(writer: W, records: &[Record]) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(COLUMN_TITLES)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render a complete report as a string.
pub fn to_csv_string(records: &[Record]) -> Result<String, csv::Error> {
    let mut buffer = Vec::new();
    write_to(&mut buffer, records)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn read_existing(path: &Path) -> Result<(StringRecord, Vec<StringRecord>), csv::Error> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = reader.headers()?.clone();
    let rows = reader.records().collect::<Result<Vec<_>, _>>()?;
    Ok((headers, rows))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    PathBuf::from(temp)
}
