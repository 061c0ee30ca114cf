//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::report::MergePolicy;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub split: SplitConfig,
}

/// Report writing configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// What `extract` adds to a report that already exists
    #[serde(default)]
    pub merge: MergePolicy,
}

/// Transcript splitting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Transcript read by `split` when no input is given
    #[serde(default = "default_transcript")]
    pub transcript: String,
    /// Directory the per-command files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

pub fn default_transcript() -> String {
    "temp.txt".to_string()
}

pub fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            transcript: default_transcript(),
            output_dir: default_output_dir(),
        }
    }
}
