//! Demo log record shapes.
//!
//! Plain lines are prefixed with their severity (`INFO: ...`, `ERROR: ...`)
//! and rely on the stream they are written to for classification. Structured
//! records serialize to a single JSON line whose `severity` field the log
//! collector honors over the stream default.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Log severity as understood by the collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format a timestamp as RFC3339 with second precision, e.g. `2026-10-16T09:30:00Z`.
pub fn rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn serialize_rfc3339<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&rfc3339(*at))
}

/// `INFO: <message> at <timestamp>`
pub fn info_line(message: &str, at: DateTime<Utc>) -> String {
    plain_line(Severity::Info, message, at)
}

/// `ERROR: <message> at <timestamp>`
pub fn error_line(message: &str, at: DateTime<Utc>) -> String {
    plain_line(Severity::Error, message, at)
}

fn plain_line(severity: Severity, message: &str, at: DateTime<Utc>) -> String {
    format!("{severity}: {message} at {}", rfc3339(at))
}

/// A record emitted as one line of JSON.
pub trait LogRecord: Serialize {
    fn severity(&self) -> Severity;

    /// Serialize to a single line. Never contains a newline.
    fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// WARNING record written to the INFO stream.
#[derive(Debug, Clone, Serialize)]
pub struct WarningRecord {
    pub severity: Severity,
    pub message: String,
    #[serde(serialize_with = "serialize_rfc3339")]
    pub time: DateTime<Utc>,
}

impl WarningRecord {
    pub fn new(message: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            time,
        }
    }
}

impl LogRecord for WarningRecord {
    fn severity(&self) -> Severity {
        self.severity
    }
}

/// Structured application error written to the ERROR stream.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    pub severity: Severity,
    pub error_type: String,
    pub description: String,
    pub retryable: bool,
    #[serde(serialize_with = "serialize_rfc3339")]
    pub timestamp: DateTime<Utc>,
}

impl ErrorRecord {
    /// The simulated database outage reported by `/trigger-custom`.
    pub fn database_connection(timestamp: DateTime<Utc>) -> Self {
        Self {
            severity: Severity::Error,
            error_type: "DatabaseConnectionError".to_string(),
            description: "Unable to connect to DB host 'db-primary:5432'".to_string(),
            retryable: false,
            timestamp,
        }
    }
}

impl LogRecord for ErrorRecord {
    fn severity(&self) -> Severity {
        self.severity
    }
}
