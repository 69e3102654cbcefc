//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The click is counted before the `302 Found` is returned.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error if the click cannot be recorded.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.redirect_service.resolve(&code).await?;

    let location = HeaderValue::try_from(original_url).map_err(|e| {
        tracing::error!(code = %code, "Stored URL is not a valid header value: {}", e);
        AppError::internal("Invalid redirect target", json!({}))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
