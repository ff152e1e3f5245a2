//! CLI logging setup
//!
//! Diagnostics go through `tracing` to stderr. The level comes from the
//! `--verbose` / `--debug` flags unless `RUST_LOG` is set.

pub mod level;

pub use level::LogLevel;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(level.is_debug())
        .try_init();
}
