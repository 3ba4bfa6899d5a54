//! Logging setup
//!
//! Installs the global `tracing` subscriber for the terminal client. Output
//! goes to stderr so command output on stdout stays machine-readable.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter used when neither `RUST_LOG` nor the config names a level
pub const DEFAULT_FILTER: &str = "studydesk=info";

/// Build the filter: `RUST_LOG` wins, then the configured level
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = if config.level.is_empty() {
            DEFAULT_FILTER.to_string()
        } else {
            format!("studydesk={}", config.level)
        };
        EnvFilter::try_new(&directive).unwrap_or_else(|_| DEFAULT_FILTER.into())
    })
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(config: &LoggingConfig) {
    let filter = env_filter(config);
    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
