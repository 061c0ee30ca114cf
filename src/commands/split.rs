//! Split command handler

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use slx::{transcript, Config};

/// Split a command transcript into one `<stem>.txt` file per block.
///
/// Arguments override the `[split]` section of the configuration.
#[cfg(not(tarpaulin_include))]
pub fn handle(input: Option<&Path>, output_dir: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let input = input.map_or_else(|| config.transcript_path(), Path::to_path_buf);
    let output_dir = output_dir.map_or_else(|| config.split_output_dir(), Path::to_path_buf);

    let entries = transcript::split_file(&input)?;
    if entries.is_empty() {
        println!("No command blocks found in {}", input.display());
        return Ok(());
    }

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    // Numbered by position in the transcript, skipped blocks included.
    for (i, entry) in entries.iter().enumerate() {
        match transcript::write_command(entry, &output_dir)? {
            Some(_) => println!("Command {} saved as {}", i + 1, entry.file_name()),
            None => println!("Command {} skipped: no file name after the confirmation", i + 1),
        }
    }

    Ok(())
}
