//! PostgreSQL account repository tests.
//!
//! Run with `DATABASE_URL` set: `cargo test -- --ignored`.

use sqlx::PgPool;
use std::sync::Arc;
use shorty::domain::entities::NewAccount;
use shorty::domain::repositories::AccountRepository;
use shorty::error::AppError;
use shorty::infrastructure::persistence::PgAccountRepository;

fn new_account(id: &str, email: &str) -> NewAccount {
    NewAccount {
        id: id.to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_and_find(pool: PgPool) {
    let repo = PgAccountRepository::new(Arc::new(pool));

    let created = repo.create(new_account("id-1", "a@b.com")).await.unwrap();

    let by_id = repo.find_by_id("id-1").await.unwrap().unwrap();
    let by_email = repo.find_by_email("a@b.com").await.unwrap().unwrap();
    assert_eq!(by_id.email, created.email);
    assert_eq!(by_email.id, created.id);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_email_conflicts(pool: PgPool) {
    let repo = PgAccountRepository::new(Arc::new(pool));
    repo.create(new_account("id-1", "a@b.com")).await.unwrap();

    let result = repo.create(new_account("id-2", "a@b.com")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    assert!(repo.find_by_id("id-2").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_missing(pool: PgPool) {
    let repo = PgAccountRepository::new(Arc::new(pool));

    assert!(repo.find_by_id("nobody").await.unwrap().is_none());
    assert!(repo.find_by_email("nobody@b.com").await.unwrap().is_none());
}
