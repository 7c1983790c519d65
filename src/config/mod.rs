//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT, METRICS_ADDRESS)
//!     → loader.rs (lookup & parse)
//!     → DemoConfig (immutable)
//!     → lifecycle::startup
//! ```
//!
//! There is no config file. Every field has a default so an empty
//! environment yields a runnable server.

pub mod loader;
pub mod schema;

pub use loader::ConfigError;
pub use schema::{DemoConfig, ListenerConfig, ObservabilityConfig, DEFAULT_PORT};
