//! Handler for the caller's own links.

use axum::{Json, extract::State};

use crate::api::dto::link::LinkResponse;
use crate::api::middleware::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists links created by the authenticated caller, newest first.
///
/// # Endpoint
///
/// `GET /me` (Bearer token required)
pub async fn me_handler(
    State(state): State<AppState>,
    AuthenticatedUser(account_id): AuthenticatedUser,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.account_service.list_owned_links(&account_id).await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}
