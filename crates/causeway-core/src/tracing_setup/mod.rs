//! Tracing setup: structured JSON logging plus span definitions.

pub mod spans;

use tracing_subscriber::EnvFilter;

use crate::config::defaults::DEFAULT_LOG_LEVEL;
use crate::constants::LOG_ENV_VAR;

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `CAUSEWAY_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Safe to call more than once:
/// later calls leave the first subscriber in place.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init();
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init();
}
