//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::application::services::LinkOptions;
use crate::error::AppError;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// Redirect target. Checked for an absolute `http`/`https` URL by the service.
    #[validate(length(min = 1, message = "original_url is required"))]
    pub original_url: String,

    /// Optional custom short code. Empty means "generate one".
    pub custom_code: Option<String>,

    /// Stored as given, never enforced.
    pub view_once: Option<bool>,

    /// Unix seconds. Stored as given, never enforced.
    pub expiry_date: Option<i64>,

    /// Caller token; the `Authorization` header is used when absent.
    pub token: Option<String>,
}

impl ShortenRequest {
    /// Builds the stored link attributes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `expiry_date` is out of range.
    pub fn options(&self) -> Result<LinkOptions, AppError> {
        let expires_at = self
            .expiry_date
            .map(|secs| {
                DateTime::<Utc>::from_timestamp(secs, 0).ok_or_else(|| {
                    AppError::bad_request(
                        "Invalid expiry_date",
                        json!({ "expiry_date": secs }),
                    )
                })
            })
            .transpose()?;

        Ok(LinkOptions {
            expires_at,
            view_once: self.view_once,
        })
    }
}
