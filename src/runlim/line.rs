//! Line classification for runlim-monitored solver logs.
//!
//! Every line the parser cares about starts with one of a fixed set of
//! prefixes. [`LineKind::classify`] maps a trimmed line to the field it
//! carries, or `None` when the line is noise.
//!
//! # Vocabulary
//!
//! ```text
//! [runlim] argv[1]: /data/inst42.cnf     <- Argument { index: 1, .. }
//! c LB-w = 2                             <- LowerBound(2)
//! c UB-w = 5                             <- UpperBound(5)
//! c Initializing a graph with n = 10     <- Initialize { n: "10" }
//! c Encoding starts with w = 3           <- EncodingStart { w: "3" }
//! c<TAB>Number of clauses: 500           <- Clauses("500")
//! c<TAB>Number of variables: 80          <- Variables("80")
//! c<TAB>Solving duration: 0.42           <- SolveDuration("0.42")
//! s SAT (w = 5)                          <- Outcome(Some(Sat))
//! s Error at w = 5, SAT result: 0        <- Outcome(None)
//! [runlim] status: out of time           <- OutOfTime
//! [runlim] real: 1.2 seconds             <- RealTime("1.2 seconds")
//! [runlim] time: 1.1 seconds             <- SolveTotal("1.1 seconds")
//! [runlim] space: 50 MB                  <- Space("50 MB")
//! ```
//!
//! A recognized prefix whose expected numeric suffix is missing yields
//! `None`, the same as an unrecognized line. Outcome lines are the
//! exception: any `s` line ends a result section, and a verdict other than
//! SAT or UNSAT is carried as an unknown outcome.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::Outcome;

const ARGUMENT_PREFIX: &str = "[runlim] argv[";
const LOWER_BOUND_PREFIX: &str = "c LB-w =";
const UPPER_BOUND_PREFIX: &str = "c UB-w =";
const INITIALIZE_PREFIX: &str = "c Initializing a ";
const ENCODING_START_PREFIX: &str = "c Encoding starts with w";
const CLAUSES_PREFIX: &str = "c\tNumber of clauses:";
const VARIABLES_PREFIX: &str = "c\tNumber of variables:";
const SOLVE_DURATION_PREFIX: &str = "c\tSolving duration:";
const OUTCOME_PREFIX: &str = "s";
const STATUS_PREFIX: &str = "[runlim] status:";
const REAL_TIME_PREFIX: &str = "[runlim] real:";
const SOLVE_TOTAL_PREFIX: &str = "[runlim] time:";
const SPACE_PREFIX: &str = "[runlim] space:";

static ARGUMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"argv\[(\d+)\]:").unwrap());
static LOWER_BOUND_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"LB-w\s*=\s*(\d+)").unwrap());
static UPPER_BOUND_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"UB-w\s*=\s*(\d+)").unwrap());
static N_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"n\s*=\s*(\d+)").unwrap());
static W_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"w\s*=\s*(\d+)").unwrap());
static OUTCOME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"s\s+(SAT|UNSAT)").unwrap());

/// The semantic content of one recognized log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A positional argument of the monitored command (`argv[index]`).
    Argument { index: usize, value: String },
    LowerBound(u64),
    UpperBound(u64),
    /// Problem size announced by the encoder.
    Initialize { n: String },
    /// Width the encoding starts with.
    EncodingStart { w: String },
    Clauses(String),
    Variables(String),
    SolveDuration(String),
    /// Solver verdict from an `s ...` line; `None` when the line reports
    /// neither SAT nor UNSAT (e.g. a solver error).
    Outcome(Option<Outcome>),
    /// runlim killed the run for exceeding the time limit.
    OutOfTime,
    /// runlim killed the run for exceeding the memory limit.
    OutOfMemory,
    RealTime(String),
    SolveTotal(String),
    Space(String),
}

impl LineKind {
    /// Classify one trimmed log line.
    ///
    /// Prefixes are tried in a fixed priority order and the first match
    /// wins. Returns `None` for lines outside the vocabulary, and for lines
    /// whose prefix matches but whose value cannot be extracted.
    pub fn classify(line: &str) -> Option<Self> {
        if line.starts_with(ARGUMENT_PREFIX) {
            let index = capture(&ARGUMENT_REGEX, line)?.parse().ok()?;
            let value = second_field(line)?.to_string();
            return Some(LineKind::Argument { index, value });
        }
        if line.starts_with(LOWER_BOUND_PREFIX) {
            return capture(&LOWER_BOUND_REGEX, line)?
                .parse()
                .ok()
                .map(LineKind::LowerBound);
        }
        if line.starts_with(UPPER_BOUND_PREFIX) {
            return capture(&UPPER_BOUND_REGEX, line)?
                .parse()
                .ok()
                .map(LineKind::UpperBound);
        }
        if line.starts_with(INITIALIZE_PREFIX) {
            let n = capture(&N_REGEX, line)?.to_string();
            return Some(LineKind::Initialize { n });
        }
        if line.starts_with(ENCODING_START_PREFIX) {
            let w = capture(&W_REGEX, line)?.to_string();
            return Some(LineKind::EncodingStart { w });
        }
        if line.starts_with(CLAUSES_PREFIX) {
            return second_field(line).map(|v| LineKind::Clauses(v.to_string()));
        }
        if line.starts_with(VARIABLES_PREFIX) {
            return second_field(line).map(|v| LineKind::Variables(v.to_string()));
        }
        if line.starts_with(SOLVE_DURATION_PREFIX) {
            return second_field(line).map(|v| LineKind::SolveDuration(v.to_string()));
        }
        if is_outcome_line(line) {
            let outcome = capture(&OUTCOME_REGEX, line).and_then(Outcome::from_token);
            return Some(LineKind::Outcome(outcome));
        }
        if line.starts_with(STATUS_PREFIX) {
            if line.contains("out of time") {
                return Some(LineKind::OutOfTime);
            }
            if line.contains("out of memory") {
                return Some(LineKind::OutOfMemory);
            }
            return None;
        }
        if line.starts_with(REAL_TIME_PREFIX) {
            return second_field(line).map(|v| LineKind::RealTime(v.to_string()));
        }
        if line.starts_with(SOLVE_TOTAL_PREFIX) {
            return second_field(line).map(|v| LineKind::SolveTotal(v.to_string()));
        }
        if line.starts_with(SPACE_PREFIX) {
            return second_field(line).map(|v| LineKind::Space(v.to_string()));
        }
        None
    }
}

/// `s` followed by whitespace, the solver verdict convention.
fn is_outcome_line(line: &str) -> bool {
    line.strip_prefix(OUTCOME_PREFIX)
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_whitespace)
}

/// First capture group of `regex` anywhere in `line`.
fn capture<'a>(regex: &Regex, line: &'a str) -> Option<&'a str> {
    regex
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Text between the first and second colon, trimmed.
///
/// Values containing a colon are cut at it; runlim never prints one in the
/// fields read this way.
fn second_field(line: &str) -> Option<&str> {
    line.split(':').nth(1).map(str::trim)
}
