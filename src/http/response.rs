//! Response helpers and the per-request panic boundary.
//!
//! A panic inside a handler is caught by `CatchPanicLayer` and turned into
//! the response built here: `500` with an empty body and `Connection: close`.
//! The panic payload is logged, never sent to the client. The listener and
//! every other connection keep running.

use std::any::Any;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Extract a printable message from a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}

/// Response sent when a handler panics.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!(panic = %panic_message(&*payload), "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONNECTION, "close")],
        (),
    )
        .into_response()
}
