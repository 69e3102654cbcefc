mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use shorty::domain::repositories::LinkRepository;

#[tokio::test]
async fn test_redirect_success() {
    let (server, links) = common::create_test_server();
    common::create_test_link(&links, "abc123", "https://example.com/page?q=1").await;

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/page?q=1");
}

#[tokio::test]
async fn test_redirect_counts_click() {
    let (server, links) = common::create_test_server();
    common::create_test_link(&links, "abc123", "https://example.com").await;

    server.get("/abc123").await.assert_status(StatusCode::FOUND);
    server.get("/abc123").await.assert_status(StatusCode::FOUND);

    let link = links.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(link.clicks, 2);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _links) = common::create_test_server();

    let response = server.get("/missing").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_redirects_count_every_click() {
    let (state, links) = common::create_test_state();
    common::create_test_link(&links, "hot", "https://example.com").await;

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..50 {
        let state = state.clone();
        tasks.spawn(async move { state.redirect_service.resolve("hot").await });
    }
    while let Some(result) = tasks.join_next().await {
        assert_eq!(result.unwrap().unwrap(), "https://example.com");
    }

    let link = links.find_by_code("hot").await.unwrap().unwrap();
    assert_eq!(link.clicks, 50);
}

#[tokio::test]
async fn test_shorten_then_resolve_round_trip() {
    let (server, links) = common::create_test_server();

    let created = server
        .post("/shorten")
        .json(&json!({ "original_url": "https://example.com" }))
        .await
        .json::<Value>();
    let code = created["short_code"].as_str().unwrap();

    for _ in 0..3 {
        let response = server.get(&format!("/{}", code)).await;
        response.assert_status(StatusCode::FOUND);
        assert_eq!(response.header("location"), "https://example.com");
    }

    let link = links.find_by_code(code).await.unwrap().unwrap();
    assert_eq!(link.clicks, 3);
}

#[tokio::test]
async fn test_redirect_storage_failure() {
    let server = common::create_unavailable_server();

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
