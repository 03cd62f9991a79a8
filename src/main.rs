//! Employee service.
//!
//! A small HTTP service exposing create, read, update and delete over a
//! single `employee` collection in a document database.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request      ┌──────────┐    ┌────────────┐    ┌──────────────┐
//!     ───────────────────▶│   http   │───▶│  employee  │───▶│    store     │───▶ MongoDB
//!                         │  server  │    │  handlers  │    │ (trait obj)  │
//!     Client Response     │          │◀───│            │◀───│              │
//!     ◀───────────────────└──────────┘    └────────────┘    └──────────────┘
//!
//!     Cross-cutting: config · observability · lifecycle
//! ```

use clap::Parser;
use std::path::PathBuf;

use employee_service::config::{load_config, ServiceConfig};
use employee_service::lifecycle::{signals, startup, Shutdown};
use employee_service::observability::logging;

#[derive(Parser)]
#[command(name = "employee-service")]
#[command(about = "HTTP CRUD service for employee records", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!("employee-service v{} starting", env!("CARGO_PKG_VERSION"));

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    if let Err(e) = startup::run(config, server_shutdown).await {
        tracing::error!(error = %e, "Service terminated");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
