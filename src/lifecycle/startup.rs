//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize subsystems in dependency order
//! - Open the document store and confirm it answers
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when the store is ready)

use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::{DatabaseConfig, ServiceConfig, StoreBackend};
use crate::http::HttpServer;
use crate::store::{EmployeeStore, MemoryStore, MongoStore, StoreError};

/// Fatal errors raised before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("document store unavailable: {0}")]
    Store(#[from] StoreError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Build the configured store implementation.
pub async fn open_store(config: &DatabaseConfig) -> Result<Arc<dyn EmployeeStore>, StoreError> {
    match config.backend {
        StoreBackend::Mongodb => {
            tracing::info!(timeout_secs = config.connect_timeout_secs, "Connecting to MongoDB");
            Ok(Arc::new(MongoStore::connect(config).await?))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on exit");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Start every subsystem and serve until `shutdown` fires.
///
/// The receiver must be subscribed before signals are listened for, so a
/// shutdown requested while the store is still connecting is not lost.
pub async fn run(
    config: ServiceConfig,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<(), StartupError> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend = ?config.database.backend,
        collection = %config.database.collection,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse::<SocketAddr>() {
            crate::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let store = tokio::select! {
        biased;
        Ok(()) = shutdown.recv() => {
            tracing::info!("Shutdown requested before the store was ready");
            return Ok(());
        }
        store = open_store(&config.database) => store?,
    };

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let server = HttpServer::new(config, store);
    server.run(listener, shutdown).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_memory_backend_opens_without_network() {
        let config = DatabaseConfig {
            backend: StoreBackend::Memory,
            ..DatabaseConfig::default()
        };
        let store = open_store(&config).await.unwrap();
        store.ping().await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bind_failure_is_reported() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut config = ServiceConfig::default();
        config.database.backend = StoreBackend::Memory;
        config.listener.bind_address = taken.local_addr().unwrap().to_string();

        let shutdown = Shutdown::new();
        let err = run(config, shutdown.subscribe()).await.unwrap_err();
        assert!(matches!(err, StartupError::Bind { .. }));
    }

    #[tokio::test]
    async fn test_run_stops_on_shutdown() {
        let mut config = ServiceConfig::default();
        config.database.backend = StoreBackend::Memory;
        config.listener.bind_address = "127.0.0.1:0".into();

        let shutdown = Shutdown::new();
        let task = tokio::spawn(run(config, shutdown.subscribe()));

        tokio::time::sleep(Duration::from_millis(200)).await;
        shutdown.trigger();

        let result = tokio::time::timeout(Duration::from_secs(5), task)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shutdown_during_store_connect_is_honoured() {
        let mut config = ServiceConfig::default();
        config.database.uri = "mongodb://127.0.0.1:1".into();
        config.database.connect_timeout_secs = 30;
        config.listener.bind_address = "127.0.0.1:0".into();

        let shutdown = Shutdown::new();
        let receiver = shutdown.subscribe();
        shutdown.trigger();

        let started = Instant::now();
        let result = tokio::time::timeout(Duration::from_secs(5), run(config, receiver))
            .await
            .unwrap();
        assert!(result.is_ok());
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
