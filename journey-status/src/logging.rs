//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Logs go to stderr and are off unless `RUST_LOG` asks for them, so
/// stdout carries nothing but the JSON document.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
