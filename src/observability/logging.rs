//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Derive the default filter from the configured log level
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the config file when set
//! - Human-readable output on stderr

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::ObservabilityConfig;

/// Filter used when `RUST_LOG` is absent.
pub fn default_filter(config: &ObservabilityConfig) -> String {
    format!(
        "employee_service={level},tower_http={level}",
        level = config.log_level
    )
}

/// Install the global subscriber.
pub fn init_logging(config: &ObservabilityConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(config).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
