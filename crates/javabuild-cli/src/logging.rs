//! Logging setup for the `javabuild` binary.
//!
//! Library crates log through the `log` facade; the subscriber installed
//! here picks those records up through `tracing-log` and writes them to
//! standard error, keeping standard output free for recipe text.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset and `--verbose` is off.
const DEFAULT_FILTER: &str = "warn";

/// Filter used with `--verbose`.
const VERBOSE_FILTER: &str = "debug";

/// Build the log filter: `--verbose` wins, then `RUST_LOG`, then `warn`.
pub fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Repeated calls are ignored.
pub fn init(verbose: bool) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_ok() {
        tracing::debug!(verbose, "Logging initialized");
    }
}
