//! Per-file parse state.
//!
//! [`ParseState`] keeps the last-seen value of every scalar field while one
//! log file is scanned, and snapshots a [`Record`] whenever a line ends a
//! result section. A fresh state is created for each file, so nothing a
//! previous file reported can leak into the next one.

use tracing::debug;

use super::line::LineKind;
use super::types::{Outcome, Record, RunTotals, UNAVAILABLE};

/// Last-seen field values for the log file currently being scanned.
#[derive(Debug, Clone, Default)]
pub struct ParseState {
    problem_name: String,
    encoding_type: String,
    lower_bound: Option<u64>,
    upper_bound: Option<u64>,
    n: Option<String>,
    w: Option<String>,
    num_clauses: String,
    num_vars: String,
    solve_time: String,
    result: Option<Outcome>,
    sections: usize,
    totals: RunTotals,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one classified line.
    ///
    /// Returns the record snapshot when the line completes a result section
    /// and every required field is known. Totals are left empty on the
    /// snapshot; see [`ParseState::totals`].
    pub fn apply(&mut self, kind: LineKind) -> Option<Record> {
        match kind {
            LineKind::Argument { index, value } => {
                match index {
                    0 => {}
                    1 => self.problem_name = base_name(&value).to_string(),
                    _ => {
                        self.encoding_type.push_str(&value);
                        self.encoding_type.push(' ');
                    }
                }
                None
            }
            LineKind::LowerBound(lb) => {
                self.lower_bound = Some(lb);
                None
            }
            LineKind::UpperBound(ub) => {
                self.upper_bound = Some(ub);
                None
            }
            LineKind::Initialize { n } => {
                self.n = Some(n);
                None
            }
            LineKind::EncodingStart { w } => {
                self.w = Some(w);
                None
            }
            LineKind::Clauses(count) => {
                self.num_clauses = count;
                None
            }
            LineKind::Variables(count) => {
                self.num_vars = count;
                None
            }
            LineKind::SolveDuration(duration) => {
                self.solve_time = duration;
                None
            }
            LineKind::Outcome(outcome) => self.end_section(outcome),
            LineKind::OutOfTime => {
                self.solve_time = UNAVAILABLE.to_string();
                self.end_section(Some(Outcome::Timeout))
            }
            LineKind::OutOfMemory => {
                self.solve_time = UNAVAILABLE.to_string();
                self.num_clauses = UNAVAILABLE.to_string();
                self.num_vars = UNAVAILABLE.to_string();
                self.end_section(Some(Outcome::MemoryOut))
            }
            LineKind::RealTime(value) => {
                self.totals.real_time = value;
                None
            }
            LineKind::SolveTotal(value) => {
                self.totals.solve_time = value;
                None
            }
            LineKind::Space(value) => {
                self.totals.space = value;
                None
            }
        }
    }

    /// The runlim totals seen so far in this file.
    pub fn totals(&self) -> &RunTotals {
        &self.totals
    }

    /// The result of the most recent section, `None` if no section has
    /// ended yet or the last verdict was unknown.
    pub fn result(&self) -> Option<Outcome> {
        self.result
    }

    /// Number of result sections ended so far, including dropped ones.
    pub fn sections(&self) -> usize {
        self.sections
    }

    fn end_section(&mut self, result: Option<Outcome>) -> Option<Record> {
        self.result = result;
        self.sections += 1;
        self.emit(result)
    }

    fn emit(&self, result: Option<Outcome>) -> Option<Record> {
        let (n, w) = match (&self.n, &self.w) {
            (Some(n), Some(w)) if !n.is_empty() && !w.is_empty() => (n, w),
            _ => {
                debug!(?result, "dropping record: n or w not reported");
                return None;
            }
        };
        if self.problem_name.is_empty() || self.encoding_type.is_empty() {
            debug!(?result, "dropping record: problem name or encoding not reported");
            return None;
        }

        debug!(
            problem = %self.problem_name,
            encoding = %self.encoding_type,
            ?result,
            "record complete"
        );
        Some(Record {
            problem_name: self.problem_name.clone(),
            encoding_type: self.encoding_type.clone(),
            lower_bound: self.lower_bound,
            upper_bound: self.upper_bound,
            n: n.clone(),
            w: w.clone(),
            num_clauses: self.num_clauses.clone(),
            num_vars: self.num_vars.clone(),
            result,
            solve_time: self.solve_time.clone(),
            total_real_time: String::new(),
            total_solve_time: String::new(),
            total_space: String::new(),
        })
    }
}

/// Last `/`-separated component of a path as logged by runlim.
///
/// A trailing slash yields an empty name, which later drops the record.
fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
