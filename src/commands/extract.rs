//! Extract command handler

use anyhow::{Context, Result};
use std::path::PathBuf;

use slx::{Aggregator, Config, MergePolicy, Progress, ReportWriter, WriteOutcome};

use super::split_inputs;

/// Parse every log in the given directories and write the report.
///
/// Progress and summary lines go to stdout, or to stderr when `json` is set
/// so that stdout carries only the JSON records.
#[cfg(not(tarpaulin_include))]
pub fn handle(paths: &[PathBuf], merge: Option<MergePolicy>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let policy = merge.unwrap_or(config.report.merge);
    let (dirs, output) = split_inputs(paths)?;

    let status = |line: String| {
        if json {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    };

    let aggregate = Aggregator::with_progress(|event: Progress<'_>| match event {
        Progress::Processing(path) => status(format!("Processing file: {}", path.display())),
        Progress::Skipped(path) => status(format!("{} is not a valid directory.", path.display())),
    })
    .run(dirs)?;

    if json {
        for record in &aggregate.records {
            let line = serde_json::to_string(record).context("Failed to serialize record")?;
            println!("{}", line);
        }
    }

    let outcome = ReportWriter::new(policy).write(output, &aggregate.records)?;
    let summary = match outcome {
        WriteOutcome::Created { rows } => format!(
            "Wrote {} records from {} files to {}",
            rows,
            aggregate.files.len(),
            output.display()
        ),
        WriteOutcome::Merged {
            policy: MergePolicy::HeaderRow,
            ..
        } => format!(
            "{} already exists: appended a header row; {} extracted records were not written (use --merge append-records to add them)",
            output.display(),
            aggregate.records.len()
        ),
        WriteOutcome::Merged {
            policy: MergePolicy::AppendRecords,
            rows_appended,
        } => format!("Appended {} records to {}", rows_appended, output.display()),
    };
    status(summary);

    Ok(())
}
