//! CLI definitions for SLX
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

use crate::report::MergePolicy;

/// Build clap styles for consistent CLI appearance.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "slx")]
#[command(about = "[ Solver Log eXtractor ] - turn runlim solver logs into experiment reports")]
#[command(
    long_about = "Solver Log eXtractor (SLX) - turn runlim-monitored solver logs into tabular reports.

SLX scans directories of solver logs produced under runlim, extracts one row per
result section (instance, encoding, bounds, size, clauses, variables, result,
timings, memory) and writes them to a CSV report.

QUICK START:
    slx extract logs/ report.csv            Extract every log in logs/
    slx extract run1/ run2/ report.csv      Combine several directories
    slx split                               Split temp.txt into per-command files

CONFIGURATION:
    slx config show                         Print the effective configuration"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract records from runlim logs into a report
    #[command(long_about = "Extract records from runlim logs into a CSV report.

Every regular file directly inside each DIR is parsed, directories in the
order given and files sorted by name. Inputs that are not directories are
reported and skipped. The last argument is the report path.

If the report does not exist it is created with a header row and one row
per record. If it exists, its header must match; with the default merge
policy (header-row) a single row of column titles is appended and the new
records are NOT written. Use --merge append-records to add them instead.

EXAMPLES:
    slx extract logs/ report.csv
    slx extract seq/ ladder/ report.csv --merge append-records
    slx extract logs/ report.csv --json     Also print records as JSON lines")]
    Extract {
        /// Log directories followed by the report path
        #[arg(
            required = true,
            num_args = 2..,
            value_name = "PATH",
            help = "Log directories followed by the output report path"
        )]
        paths: Vec<PathBuf>,

        /// What to add when the report already exists (overrides config)
        #[arg(long, value_enum, help = "What to add when the report already exists")]
        merge: Option<MergePolicy>,

        /// Print every extracted record as a JSON line on stdout
        #[arg(long, help = "Print every extracted record as a JSON line")]
        json: bool,
    },

    /// Split a command transcript into one file per command
    #[command(long_about = "Split a command transcript into one file per command.

The transcript holds blocks of the form

    Run command: <command and output>
    Command executed successfully: <name>.

Each block is saved to <name>.txt (trailing periods removed) in the output
directory, overwriting existing files. Defaults come from the [split]
section of the configuration (temp.txt and the current directory).

EXAMPLES:
    slx split
    slx split --input batch.log --output-dir commands/")]
    Split {
        /// Transcript to split (default: config split.transcript)
        #[arg(long, short, help = "Transcript file to split")]
        input: Option<PathBuf>,

        /// Directory for the per-command files (default: config split.output_dir)
        #[arg(long, short, help = "Directory to write per-command files to")]
        output_dir: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate a shell completion script.

EXAMPLES:
    slx completions --shell bash > ~/.local/share/bash-completion/completions/slx
    slx completions --shell zsh > ~/.zfunc/_slx")]
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
}
