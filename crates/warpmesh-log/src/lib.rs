//! Structured logging for the warp mesh generator.
//!
//! Events go to stderr through the `tracing` ecosystem so that stdout carries
//! nothing but the summary and the mesh. The level is controlled by `RUST_LOG`,
//! falling back to a quiet default.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize the global tracing subscriber.
///
/// Sets up:
/// - Console output on stderr with uptime timestamps, targets and levels
/// - Environment-based filtering (respects `RUST_LOG`)
/// - `default_filter` when the environment does not provide one
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
///
/// # Examples
///
/// ```no_run
/// use warpmesh_log::{DEFAULT_FILTER, init_logging};
///
/// init_logging(DEFAULT_FILTER);
/// ```
pub fn init_logging(default_filter: &str) {
    let env_filter = env_filter_or(default_filter);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}

/// Build an `EnvFilter` from `RUST_LOG`, or from `default_filter` if unset.
pub fn env_filter_or(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}
