mod common;

use axum::http::{Method, StatusCode};
use serde_json::Value;

#[tokio::test]
async fn test_health_ok() {
    let (server, _links) = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["storage"]["status"], "ok");
}

#[tokio::test]
async fn test_health_degraded_when_storage_down() {
    let server = common::create_unavailable_server();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "error");
}

#[tokio::test]
async fn test_cors_headers_on_responses() {
    let (server, _links) = common::create_test_server();

    let response = server
        .get("/health")
        .add_header("Origin", "https://app.example")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn test_cors_preflight_short_circuits() {
    let (server, _links) = common::create_test_server();

    let response = server
        .method(Method::OPTIONS, "/shorten")
        .add_header("Origin", "https://app.example")
        .add_header("Access-Control-Request-Method", "POST")
        .add_header("Access-Control-Request-Headers", "content-type,authorization")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");

    let methods = response.header("access-control-allow-methods");
    let methods = methods.to_str().unwrap();
    for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "missing {method} in {methods}");
    }

    let headers = response
        .header("access-control-allow-headers")
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(headers.contains("content-type"));
    assert!(headers.contains("authorization"));
}

#[tokio::test]
async fn test_cors_headers_on_errors() {
    let (server, _links) = common::create_test_server();

    let response = server
        .get("/missing")
        .add_header("Origin", "https://app.example")
        .await;

    response.assert_status_not_found();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}
