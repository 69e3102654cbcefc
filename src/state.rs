//! Shared application state injected into every handler.

use axum::http::HeaderName;
use std::sync::Arc;

use crate::application::services::{
    AccountService, AuthService, CredentialService, LinkService, RedirectService,
};
use crate::domain::repositories::{AccountRepository, LinkRepository};

/// Services shared by all request handlers.
///
/// Every service is built once at startup around the same repository
/// instances, so all requests observe a single store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    pub account_service: Arc<AccountService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wires the services around the given repositories.
    ///
    /// # Arguments
    ///
    /// - `link_repository` / `account_repository` - backing store
    /// - `credentials` - password hashing and token signing
    /// - `trusted_identity_header` - enables delegated authentication when set
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        account_repository: Arc<dyn AccountRepository>,
        credentials: Arc<CredentialService>,
        trusted_identity_header: Option<HeaderName>,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone())),
            redirect_service: Arc::new(RedirectService::new(link_repository.clone())),
            account_service: Arc::new(AccountService::new(
                account_repository,
                link_repository,
                credentials.clone(),
            )),
            auth_service: Arc::new(AuthService::new(credentials, trusted_identity_header)),
        }
    }
}
