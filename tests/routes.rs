//! End-to-end route behavior over a real socket.

use axum::http::StatusCode;
use error_demo::http::handlers::{CUSTOM_BODY, ERROR_BODY, WARNING_BODY};
use serde_json::Value;

mod common;

#[tokio::test]
async fn test_home_page() {
    let server = common::start_server().await;

    let res = common::client().get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();

    let actions: Vec<&str> = body
        .match_indices("<form action=\"")
        .map(|(i, m)| {
            let rest = &body[i + m.len()..];
            &rest[..rest.find('"').unwrap()]
        })
        .collect();
    assert_eq!(
        actions,
        ["/trigger-error", "/trigger-panic", "/trigger-warning", "/trigger-custom"]
    );

    let info = server.info.lines();
    assert_eq!(info.len(), 1);
    assert!(info[0].starts_with("INFO: home page visited at "));
    assert!(server.error.is_empty());

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_trigger_error() {
    let server = common::start_server().await;

    let res = common::client()
        .get(server.url("/trigger-error"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.text().await.unwrap(), ERROR_BODY);

    let errors = server.error.lines();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("generic error triggered by /trigger-error"));
    assert!(server.info.is_empty());

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_trigger_warning() {
    let server = common::start_server().await;

    let res = common::client()
        .get(server.url("/trigger-warning"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), WARNING_BODY);

    let info = server.info.lines();
    assert_eq!(info.len(), 1);
    let record: Value = serde_json::from_str(&info[0]).unwrap();
    assert_eq!(record["severity"], "WARNING");
    assert!(!record["message"].as_str().unwrap().is_empty());
    assert!(record["time"].is_string());
    assert!(server.error.is_empty());

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_trigger_custom() {
    let server = common::start_server().await;

    let res = common::client()
        .get(server.url("/trigger-custom"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.text().await.unwrap(), CUSTOM_BODY);

    let errors = server.error.lines();
    assert_eq!(errors.len(), 1);
    let record: Value = serde_json::from_str(&errors[0]).unwrap();
    assert_eq!(record["severity"], "ERROR");
    assert_eq!(record["errorType"], "DatabaseConnectionError");
    assert_eq!(record["retryable"], false);
    assert!(server.info.is_empty());

    server.shutdown.trigger();
}
