//! HTTP middleware for request processing.
//!
//! Provides authentication, CORS and observability middleware.

pub mod auth;
pub mod cors;
pub mod tracing;
