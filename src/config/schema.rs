//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the employee service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Document store connection settings.
    pub database: DatabaseConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Request hardening settings.
    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Which store implementation backs the employee collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// MongoDB via the official driver.
    #[default]
    Mongodb,
    /// Process-local map; contents are lost on exit.
    Memory,
}

/// Document store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,

    /// Connection string (e.g., "mongodb://localhost:27017").
    pub uri: String,

    /// Database holding the employee collection.
    pub name: String,

    /// Collection name.
    pub collection: String,

    /// Upper bound on the initial connect + ping, in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Mongodb,
            uri: "mongodb://localhost:27017/fiber_mongo".to_string(),
            name: "fiber_mongo".to_string(),
            collection: "employee".to_string(),
            connect_timeout_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.database.backend, StoreBackend::Mongodb);
        assert_eq!(config.database.name, "fiber_mongo");
        assert_eq!(config.database.collection, "employee");
        assert_eq!(config.database.connect_timeout_secs, 10);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_sections_merge_with_defaults() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [database]
            backend = "memory"
            collection = "staff"
            "#,
        )
        .unwrap();
        assert_eq!(config.database.backend, StoreBackend::Memory);
        assert_eq!(config.database.collection, "staff");
        assert_eq!(config.database.name, "fiber_mongo");
        assert_eq!(config.security.max_body_size, 2 * 1024 * 1024);
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let result: Result<ServiceConfig, _> = toml::from_str("[database]\nbackend = \"sqlite\"\n");
        assert!(result.is_err());
    }
}
