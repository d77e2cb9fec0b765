//! Logging setup
//!
//! Logs go to stderr so stdout carries only the query reply. Level comes
//! from `RUST_LOG`, default `warn` (structured-member warnings only).

use tracing_subscriber::EnvFilter;

/// Install the global subscriber
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
