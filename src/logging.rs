//! Diagnostic logging setup
//!
//! Request-level diagnostics from `reports_github` go through `tracing` to
//! stderr; regular command output stays on stdout.

use crate::constants::logging::{DEFAULT_FILTER, VERBOSE_FILTER};
use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is not set
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // A subscriber may already be installed when running under tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
