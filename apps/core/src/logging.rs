//! Tracing subscriber setup.
//!
//! `RUST_LOG` controls the filter (default `info`). JSON output uses the
//! bunyan format so logs can be piped through `bunyan` for reading.

use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::error::AppError;

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Logs go to stderr so they never interleave with chat output on stdout.
/// Returns an error if a global subscriber is already installed.
pub fn init(app_name: &str, json: bool) -> Result<(), AppError> {
    let result = if json {
        let subscriber = Registry::default()
            .with(env_filter())
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(app_name.to_string(), std::io::stderr));
        set_global_default(subscriber)
    } else {
        let subscriber = Registry::default()
            .with(env_filter())
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr));
        set_global_default(subscriber)
    };

    result.map_err(|e| AppError::Internal(format!("Failed to install tracing subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_internal_error() {
        // Ignored: a subscriber may already be installed.
        let _ = init("test", false);

        let second = init("test", false);
        assert!(matches!(second, Err(AppError::Internal(_))));
    }
}
