//! Request identification and tracing.
//!
//! Every request is tagged with an `x-request-id` (a UUID unless the client
//! supplied one) before it reaches the trace layer, and the same ID is echoed
//! on the response.

use axum::{
    body::Body,
    http::{HeaderMap, HeaderName, Request},
};
use tracing::Span;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// The request ID header value, or `"unknown"` if absent or not ASCII.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Span for one request, used by the trace layer.
pub fn make_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id(request.headers()),
    )
}
