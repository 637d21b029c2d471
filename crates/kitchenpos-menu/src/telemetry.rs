//! # Tracing Setup
//!
//! Installs a `tracing-subscriber` formatter filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,kitchenpos=debug,sqlx=warn";

/// Initializes the tracing subscriber for logging.
///
/// Returns `false` when a global subscriber was already installed (tests,
/// or a transport layer that set up its own).
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
