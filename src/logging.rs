//! Logging bootstrap.
//!
//! Events go to stderr so stdout stays free for program output. `RUST_LOG`
//! takes precedence over the configured level.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static LOGGING_INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the global `tracing` subscriber.
///
/// Only the first call has any effect; later calls (and calls made after
/// some other subscriber was installed) are no-ops.
pub fn init(level: &str) {
    LOGGING_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
