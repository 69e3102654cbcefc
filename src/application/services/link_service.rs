//! Short link creation.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::services::auth_service::Caller;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_url;
use serde_json::json;

/// Attempts at finding a free generated code before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Optional attributes stored alongside a link.
///
/// Neither is consulted when the link is resolved.
#[derive(Debug, Clone, Default)]
pub struct LinkOptions {
    pub expires_at: Option<DateTime<Utc>>,
    pub view_once: Option<bool>,
}

/// Service for creating shortened links.
///
/// Uniqueness of codes is enforced by the repository's conditional insert, not
/// by a lookup beforehand, so concurrent requests for the same custom code
/// cannot both succeed.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `original_url` - The redirect target, stored as given
    /// - `custom_code` - Optional custom short code; empty means "generate one"
    /// - `options` - Stored, unenforced attributes
    /// - `caller` - Becomes the owner when it is an account
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or the custom code is invalid.
    /// Returns [`AppError::Conflict`] if the custom code already exists.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn shorten(
        &self,
        original_url: String,
        custom_code: Option<String>,
        options: LinkOptions,
        caller: &Caller,
    ) -> Result<Link, AppError> {
        validate_url(&original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let owner_id = caller.account_id().map(str::to_string);

        let link = match custom_code.filter(|c| !c.is_empty()) {
            Some(code) => {
                validate_custom_code(&code)?;
                self.create_with_custom_code(code, original_url, owner_id, options)
                    .await?
            }
            None => {
                self.create_with_generated_code(original_url, owner_id, options)
                    .await?
            }
        };

        tracing::info!(
            code = %link.code,
            owned = link.is_owned(),
            "Short link created"
        );

        Ok(link)
    }

    /// Reports whether the link store is reachable.
    pub async fn storage_ready(&self) -> bool {
        self.link_repository.health_check().await
    }

    async fn create_with_custom_code(
        &self,
        code: String,
        original_url: String,
        owner_id: Option<String>,
        options: LinkOptions,
    ) -> Result<Link, AppError> {
        let new_link = NewLink {
            code: code.clone(),
            original_url,
            owner_id,
            expires_at: options.expires_at,
            view_once: options.view_once,
        };

        match self.link_repository.create(new_link).await {
            Err(AppError::Conflict { .. }) => Err(AppError::conflict(
                "Custom code already exists",
                json!({ "code": code }),
            )),
            other => other,
        }
    }

    /// Inserts under freshly generated codes until one is free.
    async fn create_with_generated_code(
        &self,
        original_url: String,
        owner_id: Option<String>,
        options: LinkOptions,
    ) -> Result<Link, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let new_link = NewLink {
                code: generate_code(),
                original_url: original_url.clone(),
                owner_id: owner_id.clone(),
                expires_at: options.expires_at,
                view_once: options.view_once,
            };

            match self.link_repository.create(new_link).await {
                Err(AppError::Conflict { .. }) => {
                    tracing::debug!("Generated code collided, retrying");
                }
                other => return other,
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
