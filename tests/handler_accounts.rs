mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_register_success() {
    let (server, _links) = common::create_test_server();

    let response = server
        .post("/register")
        .json(&json!({ "email": "a@b.com", "password": "pw" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    let token = json["token"].as_str().unwrap();
    assert_eq!(json["message"], "User registered successfully");
    assert_eq!(
        response.header("authorization"),
        format!("Bearer {}", token).as_str()
    );
    assert!(common::credentials().validate_token(token).is_ok());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let (server, _links) = common::create_test_server();
    common::register(&server, "a@b.com", "pw").await;

    let response = server
        .post("/register")
        .json(&json!({ "email": "A@B.com", "password": "other" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"]["code"], "conflict");

    // The first password still works, so nothing was overwritten.
    server
        .post("/login")
        .json(&json!({ "email": "a@b.com", "password": "pw" }))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_register_invalid_email() {
    let (server, _links) = common::create_test_server();

    let response = server
        .post("/register")
        .json(&json!({ "email": "not-an-email", "password": "pw" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_register_empty_password() {
    let (server, _links) = common::create_test_server();

    let response = server
        .post("/register")
        .json(&json!({ "email": "a@b.com", "password": "" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_login_success() {
    let (server, _links) = common::create_test_server();
    let registered = common::register(&server, "a@b.com", "pw").await;
    let account_id = common::credentials().validate_token(&registered).unwrap();

    let response = server
        .post("/login")
        .json(&json!({ "email": "a@b.com", "password": "pw" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["message"], "Login successful");

    let token = json["token"].as_str().unwrap();
    assert_eq!(common::credentials().validate_token(token).unwrap(), account_id);
    assert!(
        response
            .header("authorization")
            .to_str()
            .unwrap()
            .starts_with("Bearer ")
    );
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (server, _links) = common::create_test_server();
    common::register(&server, "a@b.com", "pw").await;

    let response = server
        .post("/login")
        .json(&json!({ "email": "a@b.com", "password": "wrong" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Invalid email or password"
    );
}

#[tokio::test]
async fn test_login_unknown_email() {
    let (server, _links) = common::create_test_server();

    let response = server
        .post("/login")
        .json(&json!({ "email": "ghost@b.com", "password": "pw" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Invalid email or password"
    );
}

#[tokio::test]
async fn test_login_missing_fields() {
    let (server, _links) = common::create_test_server();

    let response = server
        .post("/login")
        .json(&json!({ "email": "a@b.com" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_account_lifecycle() {
    let (server, _links) = common::create_test_server();

    let first = server
        .post("/register")
        .json(&json!({ "email": "a@b.com", "password": "pw" }))
        .await;
    first.assert_status(StatusCode::CREATED);

    server
        .post("/register")
        .json(&json!({ "email": "a@b.com", "password": "pw" }))
        .await
        .assert_status(StatusCode::CONFLICT);

    let login = server
        .post("/login")
        .json(&json!({ "email": "a@b.com", "password": "pw" }))
        .await;
    login.assert_status_ok();

    let registered_id = common::credentials()
        .validate_token(first.json::<Value>()["token"].as_str().unwrap())
        .unwrap();
    let login_id = common::credentials()
        .validate_token(login.json::<Value>()["token"].as_str().unwrap())
        .unwrap();
    assert_eq!(registered_id, login_id);

    server
        .post("/login")
        .json(&json!({ "email": "a@b.com", "password": "nope" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
