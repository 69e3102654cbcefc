//! In-memory implementation of account repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Account, NewAccount};
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;

/// Account repository backed by a process-local map keyed by id.
#[derive(Default)]
pub struct MemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&new_account.id)
            || accounts.values().any(|a| a.email == new_account.email)
        {
            return Err(AppError::conflict(
                "Account already exists",
                json!({ "email": new_account.email }),
            ));
        }

        let account = new_account.into_account(Utc::now());
        accounts.insert(account.id.clone(), account.clone());

        Ok(account)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Account>, AppError> {
        Ok(self.accounts.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|a| a.email == email)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_account(id: &str, email: &str) -> NewAccount {
        NewAccount {
            id: id.to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MemoryAccountRepository::new();

        let created = repo.create(new_account("id-1", "a@b.com")).await.unwrap();

        assert_eq!(repo.find_by_id("id-1").await.unwrap(), Some(created.clone()));
        assert_eq!(repo.find_by_email("a@b.com").await.unwrap(), Some(created));
        assert!(repo.find_by_email("x@y.com").await.unwrap().is_none());
        assert!(repo.find_by_id("id-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = MemoryAccountRepository::new();
        repo.create(new_account("id-1", "a@b.com")).await.unwrap();

        let result = repo.create(new_account("id-2", "a@b.com")).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
        assert!(repo.find_by_id("id-2").await.unwrap().is_none());
    }
}
