//! Metrics collection and exposition.
//!
//! # Metrics
//! - `demo_log_lines_total` (counter): demo lines written, by severity and route
//! - `demo_handler_panics_total` (counter): intentional handler panics, by route
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::record::Severity;

/// Install the Prometheus recorder and its HTTP scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_emission(severity: Severity, route: &'static str) {
    ::metrics::counter!(
        "demo_log_lines_total",
        "severity" => severity.as_str(),
        "route" => route
    )
    .increment(1);
}

pub fn record_panic(route: &'static str) {
    ::metrics::counter!("demo_handler_panics_total", "route" => route).increment(1);
}
