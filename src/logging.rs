use crate::constants::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Initializes logging to stderr, honouring `RUST_LOG`.
///
/// Stdout is reserved for the resolved filename, so every diagnostic goes to
/// stderr. Without `RUST_LOG` only warnings and errors are shown.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
