//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation
//! - [`services::redirect_service::RedirectService`] - Code resolution and click counting
//! - [`services::account_service::AccountService`] - Registration, login, owned links
//! - [`services::auth_service::AuthService`] - Caller authentication
//! - [`services::credential_service::CredentialService`] - Password hashing and tokens

pub mod services;
