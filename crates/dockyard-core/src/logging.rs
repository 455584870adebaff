//! Logging setup based on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,dockyard_docking=debug";

/// Install a global fmt subscriber.
///
/// Honors `RUST_LOG` when present. Calling this twice is harmless; the
/// second installation attempt is ignored.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a global fmt subscriber with an explicit fallback filter.
pub fn init_with_filter(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();
}
