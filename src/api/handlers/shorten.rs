//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use axum_auth::AuthBearer;
use validator::Validate;

use crate::api::dto::link::LinkResponse;
use crate::api::dto::shorten::ShortenRequest;
use crate::api::middleware::auth::BearerRejection;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "custom_code": "my-link",   // optional
///   "view_once": false,         // optional, stored only
///   "expiry_date": 1767225600,  // optional unix seconds, stored only
///   "token": "<jwt>"            // optional, falls back to Authorization header
/// }
/// ```
///
/// A valid token makes the caller the owner of the link. A missing or invalid
/// token creates an anonymous link rather than failing.
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body, URL or custom code.
/// Returns 409 Conflict if the custom code is taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    bearer: Result<AuthBearer, BearerRejection>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let options = payload.options()?;

    let token = payload
        .token
        .filter(|t| !t.is_empty())
        .or_else(|| bearer.ok().map(|AuthBearer(token)| token));
    let caller = state.auth_service.identify(token.as_deref());

    let link = state
        .link_service
        .shorten(payload.original_url, payload.custom_code, options, &caller)
        .await?;

    Ok(Json(link.into()))
}
