//! Short code resolution with click counting.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// Resolves short codes to their redirect targets.
///
/// Every successful resolution is counted; a redirect is only issued once the
/// click has been recorded.
pub struct RedirectService {
    link_repository: Arc<dyn LinkRepository>,
}

impl RedirectService {
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Looks up `code`, counts the click and returns the original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code; nothing is
    /// written in that case.
    ///
    /// Returns [`AppError::Internal`] if the lookup or the click increment fails,
    /// including when the link disappears between the two.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        match self.link_repository.increment_clicks(code).await {
            Ok(Some(clicks)) => {
                tracing::debug!(code = %code, clicks, "Click recorded");
                Ok(link.original_url)
            }
            Ok(None) => {
                tracing::error!(code = %code, "Link vanished before its click was recorded");
                Err(AppError::internal("Failed to record click", json!({})))
            }
            Err(e) => {
                tracing::error!(code = %code, "Failed to record click: {}", e);
                Err(AppError::internal("Failed to record click", json!({})))
            }
        }
    }
}
