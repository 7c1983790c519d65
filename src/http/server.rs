//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the demo handlers
//! - Wire up middleware (request ID, tracing, panic boundary)
//! - Bind the listener and serve until shutdown

use std::io;
use std::net::SocketAddr;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnFailure, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::http::handlers::{
    home, trigger_custom, trigger_error, trigger_panic, trigger_warning, HOME, TRIGGER_CUSTOM,
    TRIGGER_ERROR, TRIGGER_PANIC, TRIGGER_WARNING,
};
use crate::http::request::{make_request_span, X_REQUEST_ID};
use crate::http::response::panic_response;
use crate::lifecycle::shutdown::wait as wait_for_shutdown;
use crate::sink::Sinks;

/// Error type for server operations.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind the listening socket.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        source: io::Error,
    },

    /// The accept loop failed.
    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub sinks: Sinks,
}

/// Build the Axum router with all middleware layers.
///
/// Unknown paths fall back to the home page.
pub fn build_router(sinks: Sinks) -> Router {
    let state = AppState { sinks };

    // The 500s are deliberate, so failures are only traced at DEBUG.
    let trace = TraceLayer::new_for_http()
        .make_span_with(make_request_span)
        .on_response(DefaultOnResponse::new().level(Level::DEBUG))
        .on_failure(DefaultOnFailure::new().level(Level::DEBUG));

    Router::new()
        .route(HOME, get(home))
        .route(TRIGGER_ERROR, get(trigger_error))
        .route(TRIGGER_PANIC, get(trigger_panic))
        .route(TRIGGER_WARNING, get(trigger_warning))
        .route(TRIGGER_CUSTOM, get(trigger_custom))
        .fallback(home)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
                .layer(trace)
                .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                .layer(CatchPanicLayer::custom(panic_response)),
        )
}

/// HTTP server for the demo.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new(sinks: Sinks) -> Self {
        Self {
            router: build_router(sinks),
        }
    }

    /// Bind a TCP listener on `address`.
    pub async fn bind(address: SocketAddr) -> Result<TcpListener, ServerError> {
        let listener = TcpListener::bind(address)
            .await
            .map_err(|source| ServerError::Bind { address, source })?;
        Ok(listener)
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires. In-flight requests are drained before returning.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
