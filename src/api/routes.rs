//! API route configuration.

use crate::api::handlers::{
    login_handler, me_handler, redirect_handler, register_handler, shorten_handler,
};
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Routes that require an authenticated caller.
///
/// # Endpoints
///
/// - `GET  /me`        - Links owned by the caller
pub fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(me_handler))
        .route_layer(middleware::from_fn_with_state(state, auth::layer))
}

/// Routes open to anonymous callers.
///
/// # Endpoints
///
/// - `POST /shorten`   - Create a short link (owned when a valid token is sent)
/// - `POST /register`  - Create an account
/// - `POST /login`     - Obtain a token
/// - `GET  /{code}`    - Redirect to the original URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/{code}", get(redirect_handler))
}
