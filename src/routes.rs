//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`     - Create a short link (optional token)
//! - `GET  /{code}`      - Short link redirect (public)
//! - `GET  /me`          - Caller's links (Bearer token required)
//! - `POST /register`    - Create an account
//! - `POST /login`       - Obtain a token
//! - `GET  /health`      - Health check (public)
//!
//! # Middleware
//!
//! - **CORS** - Permissive, answers preflight requests directly
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token on protected routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// All routes and middleware, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::protected_routes(state.clone()))
        .merge(api::routes::public_routes())
        .with_state(state)
        .layer(tracing::layer())
        .layer(cors::layer())
}
