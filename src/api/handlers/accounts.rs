//! Handlers for account registration and login.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, RegisterRequest, TokenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers an account and returns its first token.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Response
///
/// `201 Created` with the token in the body and in the `Authorization` header:
///
/// ```json
/// { "message": "User registered successfully", "token": "<jwt>" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed email or an empty password.
/// Returns 409 Conflict if the email is already registered.
pub async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let (_, token) = state
        .account_service
        .register(&payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::AUTHORIZATION, format!("Bearer {}", token))],
        Json(TokenResponse {
            message: "User registered successfully".to_string(),
            token,
        }),
    ))
}

/// Exchanges credentials for a token.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body.
/// Returns 401 Unauthorized for an unknown email or a wrong password.
pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let token = state
        .account_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok((
        [(header::AUTHORIZATION, format!("Bearer {}", token))],
        Json(TokenResponse {
            message: "Login successful".to_string(),
            token,
        }),
    ))
}
