//! Business logic services for the application layer.

pub mod account_service;
pub mod auth_service;
pub mod credential_service;
pub mod link_service;
pub mod redirect_service;

pub use account_service::AccountService;
pub use auth_service::{AuthService, Caller};
pub use credential_service::CredentialService;
pub use link_service::{LinkOptions, LinkService};
pub use redirect_service::RedirectService;
