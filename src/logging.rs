//! Diagnostic logging setup for the CLI.
//!
//! Console output meant for the user (progress lines, summaries) is printed
//! directly by the command handlers. `tracing` events are diagnostics and go
//! to stderr, filtered by `RUST_LOG` or the `-v` count.

use tracing_subscriber::{fmt, EnvFilter};

/// Log level directive for a given `-v` count.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the level follows the
/// verbosity count. Calling this twice is harmless.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
