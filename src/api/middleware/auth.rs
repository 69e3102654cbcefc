//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Rejection produced by [`AuthBearer`] when the header is missing or not a
/// bearer credential.
pub type BearerRejection = <AuthBearer as FromRequestParts<AppState>>::Rejection;

/// Account id of an authenticated caller.
///
/// Set by [`layer`] on protected routes. Used as an extractor on a route
/// mounted without the layer, it authenticates the request itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub String);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(user.clone());
        }

        let bearer = AuthBearer::from_request_parts(parts, state)
            .await
            .ok()
            .map(|AuthBearer(token)| token);

        let account_id = state
            .auth_service
            .authenticate(&parts.headers, bearer.as_deref())?;

        Ok(AuthenticatedUser(account_id))
    }
}

/// Authenticates requests for protected routes.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// When a trusted identity header is configured, the account id is read from
/// that header instead and the bearer token is ignored.
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing or malformed
/// - Token signature, algorithm or expiry is invalid
/// - The trusted identity header is missing (delegated mode)
///
/// Adds `WWW-Authenticate: Bearer` header to 401 responses per RFC 6750.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/me", get(me_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let user = AuthenticatedUser::from_request_parts(&mut parts, &st).await?;
    parts.extensions.insert(user);

    Ok(next.run(Request::from_parts(parts, body)).await)
}
