//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (one task per connection, axum::serve)
//!     → request.rs (request ID, trace span)
//!     → response.rs (panic boundary)
//!     → handlers.rs (write demo line to a sink, fixed response)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{build_router, AppState, HttpServer, ServerError};
