//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Operational events (startup, bind, shutdown, request spans):
//!     → logging.rs (tracing subscriber)
//!     → WARN/ERROR on stderr, everything else on stdout
//!
//! Demo emissions and handler panics:
//!     → metrics.rs (counters)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! Operational logs are separate from the demo lines written through
//! `crate::sink`, but they obey the same stream convention so the collector
//! classifies them consistently.

pub mod logging;
pub mod metrics;
