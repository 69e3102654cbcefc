//! Account registration, login and owned-link listing.

use std::sync::Arc;

use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::application::services::CredentialService;
use crate::domain::entities::{Account, Link, NewAccount};
use crate::domain::repositories::{AccountRepository, LinkRepository};
use crate::error::AppError;

/// Service for user accounts.
///
/// Emails are compared case-insensitively: they are trimmed and lowercased
/// before they reach the repository.
pub struct AccountService {
    account_repository: Arc<dyn AccountRepository>,
    link_repository: Arc<dyn LinkRepository>,
    credentials: Arc<CredentialService>,
}

impl AccountService {
    pub fn new(
        account_repository: Arc<dyn AccountRepository>,
        link_repository: Arc<dyn LinkRepository>,
        credentials: Arc<CredentialService>,
    ) -> Self {
        Self {
            account_repository,
            link_repository,
            credentials,
        }
    }

    /// Registers a new account and issues its first token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on hashing, signing or storage errors.
    #[instrument(name = "AccountService: register", skip(self, password))]
    pub async fn register(&self, email: &str, password: &str) -> Result<(Account, String), AppError> {
        let email = normalize_email(email);
        let password_hash = self.hash_password(password.to_string()).await?;

        let new_account = NewAccount {
            id: Uuid::new_v4().to_string(),
            email: email.clone(),
            password_hash,
        };

        let account = match self.account_repository.create(new_account).await {
            Err(AppError::Conflict { .. }) => {
                tracing::warn!("Registration rejected: email already exists");
                return Err(AppError::conflict(
                    "Email already exists",
                    json!({ "email": email }),
                ));
            }
            other => other?,
        };

        let token = self.credentials.issue_token(&account.id)?;

        tracing::info!(account_id = %account.id, "Account registered");
        Ok((account, token))
    }

    /// Verifies credentials and issues a new token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with the same message whether the email
    /// is unknown or the password is wrong.
    /// Returns [`AppError::Internal`] on storage or signing errors.
    #[instrument(name = "AccountService: login", skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let email = normalize_email(email);

        let Some(account) = self.account_repository.find_by_email(&email).await? else {
            tracing::warn!("Login failed: account not found");
            return Err(invalid_credentials());
        };

        if !self
            .verify_password(password.to_string(), account.password_hash.clone())
            .await?
        {
            tracing::warn!("Login failed: invalid password");
            return Err(invalid_credentials());
        }

        tracing::info!(account_id = %account.id, "Account authenticated");
        self.credentials.issue_token(&account.id)
    }

    /// Lists the links created by an account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_owned_links(&self, account_id: &str) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_by_owner(account_id).await
    }

    async fn hash_password(&self, password: String) -> Result<String, AppError> {
        let credentials = self.credentials.clone();

        tokio::task::spawn_blocking(move || credentials.hash_password(&password))
            .await
            .map_err(|e| {
                tracing::error!("Password hashing task failed: {}", e);
                AppError::internal("Failed to hash password", json!({}))
            })?
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, AppError> {
        let credentials = self.credentials.clone();

        tokio::task::spawn_blocking(move || credentials.verify_password(&password, &hash))
            .await
            .map_err(|e| {
                tracing::error!("Password verification task failed: {}", e);
                AppError::internal("Failed to verify password", json!({}))
            })
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized("Invalid email or password", json!({}))
}
