//! Record and outcome types shared by the parser and the report layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Report column titles, in the fixed order every report uses.
pub const COLUMN_TITLES: [&str; 13] = [
    "Problem Name",
    "Encoding Type",
    "LB",
    "UB",
    "n",
    "w",
    "Number clauses",
    "Number variables",
    "Result",
    "Solve time",
    "Total real time",
    "Total solve time",
    "Total space",
];

/// Placeholder used for fields a timeout or memory-out leaves unknown.
pub const UNAVAILABLE: &str = "-";

/// How a solver run section ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "SAT")]
    Sat,
    #[serde(rename = "UNSAT")]
    Unsat,
    /// runlim stopped the solver: out of time
    #[serde(rename = "TO")]
    Timeout,
    /// runlim stopped the solver: out of memory
    #[serde(rename = "MO")]
    MemoryOut,
}

impl Outcome {
    /// Short code written into the report.
    pub fn code(&self) -> &'static str {
        match self {
            Outcome::Sat => "SAT",
            Outcome::Unsat => "UNSAT",
            Outcome::Timeout => "TO",
            Outcome::MemoryOut => "MO",
        }
    }

    /// Parse the token printed on an `s ...` line.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "SAT" => Some(Outcome::Sat),
            "UNSAT" => Some(Outcome::Unsat),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One row of the experiment report.
///
/// Field order matches [`COLUMN_TITLES`] and is relied upon by the CSV
/// serializer, so do not reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub problem_name: String,
    pub encoding_type: String,
    /// `None` when the log never reported a lower bound
    pub lower_bound: Option<u64>,
    /// `None` when the log never reported an upper bound
    pub upper_bound: Option<u64>,
    pub n: String,
    pub w: String,
    pub num_clauses: String,
    pub num_vars: String,
    /// `None` when the solver printed a verdict other than SAT or UNSAT
    pub result: Option<Outcome>,
    pub solve_time: String,
    pub total_real_time: String,
    pub total_solve_time: String,
    pub total_space: String,
}

/// Whole-file runlim totals, reported once near the end of a log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunTotals {
    pub real_time: String,
    pub solve_time: String,
    pub space: String,
}

impl Record {
    /// Attach a file's runlim totals to this record.
    pub fn apply_totals(&mut self, totals: &RunTotals) {
        self.total_real_time = totals.real_time.clone();
        self.total_solve_time = totals.solve_time.clone();
        self.total_space = totals.space.clone();
    }
}
