//! Structured logging.
//!
//! Uses `tracing` with an `EnvFilter` read from `RUST_LOG`. Output is plain
//! text without ANSI colors since it is consumed by a log collector.

use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::writer::{MakeWriter, MakeWriterExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "error_demo=info";

/// Formatting layer that sends WARN and ERROR events to `stderr` and
/// everything else to `stdout`, matching the collector's stream-based
/// severity default.
pub fn fmt_layer<S, E, O>(stderr: E, stdout: O) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    E: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    O: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(stderr.with_max_level(Level::WARN).or_else(stdout))
}

/// Install the global tracing subscriber over the process streams.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(std::io::stderr, std::io::stdout))
        .init();
}
