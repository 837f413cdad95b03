use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// `RUST_LOG` when set and valid, otherwise [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize logging with a default filter.
///
/// Use `RUST_LOG` environment variable to override the default filter.
pub fn init_logging() {
    fmt().with_env_filter(env_filter()).with_target(false).init();
}
