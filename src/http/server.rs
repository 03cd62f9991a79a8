//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, body limit, request ID, metrics)
//! - Bind server to listener
//! - Drain in-flight requests and close the store on shutdown

use axum::{
    body::Body,
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::employee::employee_router;
use crate::health::get_health;
use crate::http::request::{make_request_span, MakeRequestUuid, X_REQUEST_ID};
use crate::observability::metrics::track_requests;
use crate::store::EmployeeStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EmployeeStore>,
}

/// HTTP server for the employee service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    store: Arc<dyn EmployeeStore>,
}

impl HttpServer {
    /// Create a new HTTP server over an already connected store.
    pub fn new(config: ServiceConfig, store: Arc<dyn EmployeeStore>) -> Self {
        let state = AppState {
            store: store.clone(),
        };
        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            store,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .merge(employee_router())
            .route("/health", get(get_health))
            .layer(middleware::from_fn(track_requests))
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// A handle to the fully layered router, for in-process dispatch.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then close the store.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining connections");
            })
            .await?;

        self.store.close().await;
        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
