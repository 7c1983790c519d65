//! Demo log output channels.
//!
//! # Data Flow
//! ```text
//! http handler
//!     → record.rs (plain line or single-line JSON)
//!     → Sinks::info  → stdout  (collector default: INFO)
//!     → Sinks::error → stderr  (collector default: ERROR)
//! ```
//!
//! A JSON line carrying a `severity` field overrides the stream default on the
//! collector side, which is how WARNING lines reach it through stdout.
//!
//! Handlers never touch the process streams directly. They go through the
//! [`Sinks`] carried in application state, so tests swap in [`MemorySink`].

pub mod memory;
pub mod stream;

use std::io;
use std::sync::Arc;

pub use memory::MemorySink;
pub use stream::{StderrSink, StdoutSink};

/// A destination for demo log lines.
pub trait LogSink: Send + Sync {
    /// Write a single line. The sink appends the trailing newline.
    fn write(&self, line: &str) -> io::Result<()>;
}

/// The pair of output channels a handler may write to.
#[derive(Clone)]
pub struct Sinks {
    /// INFO-classified channel.
    pub info: Arc<dyn LogSink>,
    /// ERROR-classified channel.
    pub error: Arc<dyn LogSink>,
}

impl Sinks {
    pub fn new(info: Arc<dyn LogSink>, error: Arc<dyn LogSink>) -> Self {
        Self { info, error }
    }

    /// Sinks bound to the process stdout and stderr.
    pub fn process() -> Self {
        Self::new(Arc::new(StdoutSink), Arc::new(StderrSink))
    }

    /// Two independent in-memory sinks, returned alongside the bundle so the
    /// caller can inspect what was written.
    pub fn memory() -> (Self, MemorySink, MemorySink) {
        let info = MemorySink::new();
        let error = MemorySink::new();
        let sinks = Self::new(Arc::new(info.clone()), Arc::new(error.clone()));
        (sinks, info, error)
    }
}

impl std::fmt::Debug for Sinks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sinks").finish_non_exhaustive()
    }
}
