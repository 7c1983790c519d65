//! Shared utilities for integration and load testing.

#![allow(dead_code)]

use std::net::SocketAddr;

use error_demo::http::HttpServer;
use error_demo::lifecycle::Shutdown;
use error_demo::sink::{MemorySink, Sinks};
use tokio::net::TcpListener;

/// A server running on an ephemeral local port with in-memory sinks.
pub struct TestServer {
    pub addr: SocketAddr,
    pub info: MemorySink,
    pub error: MemorySink,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a demo server on `127.0.0.1:0`.
pub async fn start_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (sinks, info, error) = Sinks::memory();
    let shutdown = Shutdown::new();
    let server = HttpServer::new(sinks);
    let server_shutdown = shutdown.subscribe();

    let handle = tokio::spawn(async move {
        server.run(listener, server_shutdown).await.unwrap();
    });

    TestServer {
        addr,
        info,
        error,
        shutdown,
        handle,
    }
}

/// A client that never reuses connections, so one request's fate cannot
/// leak into the next.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
