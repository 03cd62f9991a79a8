//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;
use crate::config::schema::{ServiceConfig, StoreBackend};

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),

    #[error("database.{0} must not be empty")]
    EmptyField(&'static str),

    #[error("database.connect_timeout_secs must be greater than zero")]
    ConnectTimeout,

    #[error("observability.metrics_address `{0}` is not a socket address")]
    MetricsAddress(String),

    #[error("security.max_body_size must be greater than zero")]
    BodyLimit,
}

/// Check a parsed configuration, collecting every problem.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    let db = &config.database;
    if db.backend == StoreBackend::Mongodb {
        if db.uri.trim().is_empty() {
            errors.push(ValidationError::EmptyField("uri"));
        }
        if db.name.trim().is_empty() {
            errors.push(ValidationError::EmptyField("name"));
        }
        if db.connect_timeout_secs == 0 {
            errors.push(ValidationError::ConnectTimeout);
        }
    }
    if db.collection.trim().is_empty() {
        errors.push(ValidationError::EmptyField("collection"));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::BodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.database.name = String::new();
        config.database.connect_timeout_secs = 0;
        config.security.max_body_size = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::BindAddress("not-an-address".into()),
                ValidationError::EmptyField("name"),
                ValidationError::ConnectTimeout,
                ValidationError::BodyLimit,
            ]
        );
    }

    #[test]
    fn test_memory_backend_ignores_connection_fields() {
        let mut config = ServiceConfig::default();
        config.database.backend = StoreBackend::Memory;
        config.database.uri = String::new();
        config.database.connect_timeout_secs = 0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = ServiceConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::MetricsAddress("nope".into())]
        );
    }
}
