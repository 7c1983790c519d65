//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Announce → Metrics exporter (optional) → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! A bind failure is fatal. There is no retry.

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
