//! Error Demo Server
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser form (GET)
//!     ─────────────────▶ ┌────────────┐    ┌──────────────┐    ┌──────────┐
//!                        │   http     │───▶│   handlers   │───▶│  sinks   │──▶ stdout (INFO)
//!                        │  server    │    │ (one line,   │    │          │──▶ stderr (ERROR)
//!     ◀───────────────── │ + panic    │◀───│  fixed body) │    └──────────┘
//!     fixed response     │ boundary   │    └──────────────┘
//!                        └────────────┘
//!
//!     Cross-cutting: config (env) · observability (tracing, metrics) · lifecycle
//! ```

use std::process::ExitCode;

use error_demo::config::DemoConfig;
use error_demo::lifecycle::{signals, startup, Shutdown};
use error_demo::observability::logging;
use error_demo::sink::Sinks;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "error-demo starting");

    let config = match DemoConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        metrics_address = ?config.observability.metrics_address,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    match startup::start(config, Sinks::process(), server_shutdown).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}
