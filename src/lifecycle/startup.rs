//! Startup orchestration.
//!
//! Order: announce on the INFO sink, start the metrics exporter if
//! configured, bind, then serve. Any bind error is returned to the caller,
//! which treats it as fatal. A metrics exporter that fails to install is
//! logged and the server starts without it.

use chrono::Utc;
use tokio::sync::broadcast;

use crate::config::DemoConfig;
use crate::http::{HttpServer, ServerError};
use crate::observability::metrics;
use crate::record;
use crate::sink::Sinks;

/// Run the server until `shutdown` fires.
pub async fn start(
    config: DemoConfig,
    sinks: Sinks,
    shutdown: broadcast::Receiver<()>,
) -> Result<(), ServerError> {
    announce(&sinks, config.listener.port);

    if let Some(addr) = config.observability.metrics_address {
        if let Err(e) = metrics::init_metrics(addr) {
            tracing::error!(address = %addr, error = %e, "Failed to start metrics exporter");
        }
    }

    let listener = HttpServer::bind(config.listener.bind_address()).await?;
    HttpServer::new(sinks).run(listener, shutdown).await
}

/// Write the startup line to the INFO sink.
fn announce(sinks: &Sinks, port: u16) {
    let line = record::info_line(&format!("starting Error Demo server on port {port}"), Utc::now());
    if let Err(e) = sinks.info.write(&line) {
        tracing::warn!(error = %e, "Failed to write startup line");
    }
}
