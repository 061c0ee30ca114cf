//! Configuration management for SLX

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path (~/.config/slx/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/slx)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        io::to_toml(self)
    }

    /// Transcript path with ~ expanded
    pub fn transcript_path(&self) -> PathBuf {
        expand_home(&self.split.transcript)
    }

    /// Split output directory with ~ expanded
    pub fn split_output_dir(&self) -> PathBuf {
        expand_home(&self.split.output_dir)
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
