//! Logging setup for the command-line binary.
//!
//! Library code logs through `log` and `tracing`; the binary installs a
//! single `tracing_subscriber` that also receives `log` records. Output goes
//! to stderr so stdout carries only the report.
//!
//! ```ignore
//! use aspectlens::observability::init_logging;
//!
//! fn main() {
//!     init_logging(cli.verbosity);
//!     // ...
//! }
//! ```

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
pub fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber; `RUST_LOG` takes precedence over `-v`.
///
/// Calling it twice is harmless: the second install fails quietly.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
