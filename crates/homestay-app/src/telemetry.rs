//! Tracing setup for the consuming boundary

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber. `RUST_LOG` controls the
/// filter; defaults to `info` for this workspace. Safe to call once.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("homestay=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
