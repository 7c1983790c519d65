//! Error Demo Server Library
//!
//! A small HTTP service that writes log lines of chosen severities to stdout
//! and stderr, and can crash a single request on demand, so that a log
//! collection pipeline's severity classification can be checked end to end.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod record;
pub mod sink;

pub use config::DemoConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use sink::{LogSink, Sinks};
