//! runlim log parsing.
//!
//! A runlim log is the monitored output of one solver invocation. The
//! solver's own comment lines (`c ...`) describe the instance and encoding,
//! `s ...` lines announce a verdict, and runlim's `[runlim] ...` lines carry
//! the command line, the exit status and the resource totals.
//!
//! Parsing is split into three layers:
//! - `line`: classify a single line into a [`LineKind`]
//! - `accumulator`: fold classified lines into a per-file [`ParseState`]
//! - `parser`: drive the state over a whole file and broadcast totals

mod accumulator;
mod line;
mod parser;
mod types;

pub use accumulator::ParseState;
pub use line::LineKind;
pub use parser::{parse_file, parse_str};
pub use types::{Outcome, Record, RunTotals, COLUMN_TITLES, UNAVAILABLE};
