//! Logging bootstrap.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize a stderr `tracing` subscriber.
///
/// `RUST_LOG` overrides the default filter. Calling this twice is harmless
/// (the second registration is ignored), which keeps tests that drive `app`
/// from panicking.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,endocleave_sweep=info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
