//! Demo route handlers.
//!
//! Each handler writes exactly one line to one sink and returns a fixed
//! response. `/trigger-panic` writes its line and then panics; the response
//! for that route comes from the panic boundary in `response.rs`.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, Response},
};
use chrono::Utc;

use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::record::{self, ErrorRecord, LogRecord, Severity, WarningRecord};
use crate::sink::LogSink;

pub const HOME: &str = "/";
pub const TRIGGER_ERROR: &str = "/trigger-error";
pub const TRIGGER_PANIC: &str = "/trigger-panic";
pub const TRIGGER_WARNING: &str = "/trigger-warning";
pub const TRIGGER_CUSTOM: &str = "/trigger-custom";

pub const PANIC_MESSAGE: &str = "✨ intentional panic: simulated crash for demo ✨";
pub const WARNING_MESSAGE: &str = "This is a WARNING log triggered by /trigger-warning";

pub const ERROR_BODY: &str = "500 Internal Server Error: generic error was triggered.\n";
pub const WARNING_BODY: &str = "200 OK: a WARNING log was emitted.\n";
pub const CUSTOM_BODY: &str = "500 Internal Server Error: database connection error simulated.\n";

pub const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Error Demo</title></head>
  <body>
    <h1>Error Demo App</h1>
    <p>Click a button below to generate different log severities:</p>
    <ul>
      <li><form action="/trigger-error"><button>Trigger ERROR</button></form></li>
      <li><form action="/trigger-panic"><button>Trigger PANIC</button></form></li>
      <li><form action="/trigger-warning"><button>Trigger WARNING</button></form></li>
      <li><form action="/trigger-custom"><button>Trigger CUSTOM Error</button></form></li>
    </ul>
    <p>(Return to <a href="/">Home</a> to try again.)</p>
  </body>
</html>
"#;

/// Write one demo line. Failures are reported operationally and never
/// change the HTTP response.
fn emit(sink: &dyn LogSink, severity: Severity, route: &'static str, line: &str) {
    match sink.write(line) {
        Ok(()) => metrics::record_emission(severity, route),
        Err(e) => tracing::error!(route, %severity, error = %e, "Failed to write demo log line"),
    }
}

/// Serialize a structured record and write it, or report why it couldn't be.
fn emit_record<R: LogRecord>(sink: &dyn LogSink, route: &'static str, record: &R) {
    match record.to_line() {
        Ok(line) => emit(sink, record.severity(), route, &line),
        Err(e) => tracing::error!(route, error = %e, "Failed to serialize demo record"),
    }
}

/// `GET /` and every unknown path: INFO line, HTML page.
pub async fn home(State(state): State<AppState>, headers: HeaderMap) -> Html<&'static str> {
    tracing::debug!(request_id = %request_id(&headers), "Serving home page");

    let line = record::info_line("home page visited", Utc::now());
    emit(state.sinks.info.as_ref(), Severity::Info, HOME, &line);

    Html(HOME_PAGE)
}

/// `GET /trigger-error`: plain ERROR line, 500.
pub async fn trigger_error(State(state): State<AppState>) -> (StatusCode, &'static str) {
    let line = record::error_line("generic error triggered by /trigger-error", Utc::now());
    emit(state.sinks.error.as_ref(), Severity::Error, TRIGGER_ERROR, &line);

    (StatusCode::INTERNAL_SERVER_ERROR, ERROR_BODY)
}

/// `GET /trigger-panic`: ERROR line, then an intentional panic.
pub async fn trigger_panic(State(state): State<AppState>) -> Response {
    let line = record::error_line("about to panic (triggered by /trigger-panic)", Utc::now());
    emit(state.sinks.error.as_ref(), Severity::Error, TRIGGER_PANIC, &line);
    metrics::record_panic(TRIGGER_PANIC);

    panic!("{PANIC_MESSAGE}");
}

/// `GET /trigger-warning`: JSON WARNING record on the INFO sink, 200.
pub async fn trigger_warning(State(state): State<AppState>) -> (StatusCode, &'static str) {
    let record = WarningRecord::new(WARNING_MESSAGE, Utc::now());
    emit_record(state.sinks.info.as_ref(), TRIGGER_WARNING, &record);

    (StatusCode::OK, WARNING_BODY)
}

/// `GET /trigger-custom`: JSON database error record on the ERROR sink, 500.
pub async fn trigger_custom(State(state): State<AppState>) -> (StatusCode, &'static str) {
    let record = ErrorRecord::database_connection(Utc::now());
    emit_record(state.sinks.error.as_ref(), TRIGGER_CUSTOM, &record);

    (StatusCode::INTERNAL_SERVER_ERROR, CUSTOM_BODY)
}
