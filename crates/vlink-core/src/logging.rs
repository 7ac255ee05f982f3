//! Logging init: stderr only, so stdout carries nothing but the generated link.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Initialize structured logging to stderr. `RUST_LOG` overrides the default
/// `warn` filter (e.g. `RUST_LOG=debug`).
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
