//! Solver Log eXtractor (SLX) Library
//!
//! Turns runlim-monitored solver logs into tabular experiment reports, and
//! splits batch command transcripts into one file per command.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod logging;
pub mod report;
pub mod runlim;
pub mod transcript;

pub use aggregate::{Aggregate, Aggregator, Progress};
pub use config::Config;
pub use report::{MergePolicy, ReportError, ReportWriter, WriteOutcome};
pub use runlim::{LineKind, Outcome, ParseState, Record};
pub use transcript::CommandEntry;
