//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout only ever carries the report.

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};
use tracing_subscriber::EnvFilter;

/// Build the log filter from `HELLO_APP_LOG`, then `RUST_LOG`, then the default.
///
/// An unparsable directive falls back to the default filter rather than failing.
pub fn build_filter() -> EnvFilter {
    let directives = std::env::var(LOG_ENV_VAR)
        .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global stderr subscriber.
///
/// Returns `false` if a subscriber was already installed.
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let _first = init();
        // A global subscriber is in place either way, so the second call is a no-op.
        assert!(!init());
    }
}
