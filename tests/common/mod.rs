#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Duration;
use serde_json::{Value, json};
use shorty::application::services::CredentialService;
use shorty::domain::entities::{Link, NewLink};
use shorty::domain::repositories::LinkRepository;
use shorty::error::AppError;
use shorty::infrastructure::memory::{MemoryAccountRepository, MemoryLinkRepository};
use shorty::routes::router;
use shorty::state::AppState;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-signing-secret";

pub fn credentials() -> Arc<CredentialService> {
    Arc::new(CredentialService::new(TEST_SECRET, Duration::hours(24)))
}

/// State over fresh in-memory stores. The link store is returned for direct
/// inspection.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let links = Arc::new(MemoryLinkRepository::new());
    let accounts = Arc::new(MemoryAccountRepository::new());

    let state = AppState::new(links.clone(), accounts, credentials(), None);

    (state, links)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    let (state, links) = create_test_state();
    (TestServer::new(router(state)).unwrap(), links)
}

pub async fn create_test_link(links: &MemoryLinkRepository, code: &str, url: &str) -> Link {
    links
        .create(NewLink {
            code: code.to_string(),
            original_url: url.to_string(),
            owner_id: None,
            expires_at: None,
            view_once: None,
        })
        .await
        .unwrap()
}

/// Registers an account and returns the issued token.
pub async fn register(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/register")
        .json(&json!({ "email": email, "password": password }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Link store whose backend is down.
pub struct UnavailableLinkRepository;

fn unavailable() -> AppError {
    AppError::internal("Database error", json!({}))
}

#[async_trait]
impl LinkRepository for UnavailableLinkRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(unavailable())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(unavailable())
    }

    async fn increment_clicks(&self, _code: &str) -> Result<Option<i64>, AppError> {
        Err(unavailable())
    }

    async fn list_by_owner(&self, _owner_id: &str) -> Result<Vec<Link>, AppError> {
        Err(unavailable())
    }

    async fn delete(&self, _code: &str) -> Result<bool, AppError> {
        Err(unavailable())
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_unavailable_server() -> TestServer {
    let state = AppState::new(
        Arc::new(UnavailableLinkRepository),
        Arc::new(MemoryAccountRepository::new()),
        credentials(),
        None,
    );

    TestServer::new(router(state)).unwrap()
}
