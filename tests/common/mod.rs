//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::sync::Arc;
use employee_service::{HttpServer, MemoryStore, ServiceConfig, Shutdown};

/// A service running on a loopback port over an in-memory store.
pub struct TestService {
    pub addr: SocketAddr,
    pub store: MemoryStore,
    pub shutdown: Shutdown,
    pub client: reqwest::Client,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestService {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a service on an ephemeral port.
pub async fn start_service() -> TestService {
    let store = MemoryStore::new();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = ServiceConfig::default();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, Arc::new(store.clone()));
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap();

    TestService {
        addr,
        store,
        shutdown,
        client,
    }
}
