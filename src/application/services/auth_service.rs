//! Caller authentication for protected and optionally-authenticated endpoints.

use axum::http::{HeaderMap, HeaderName};
use serde_json::json;
use std::sync::Arc;

use crate::application::services::CredentialService;
use crate::error::AppError;

/// Who is making a request to an endpoint where authentication is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    Account(String),
    Anonymous,
}

impl Caller {
    /// Account id of the caller, if any.
    pub fn account_id(&self) -> Option<&str> {
        match self {
            Caller::Account(id) => Some(id),
            Caller::Anonymous => None,
        }
    }
}

/// Resolves the account behind a request.
///
/// Two modes are supported:
///
/// - **Inline** (default): the `Authorization: Bearer <jwt>` token is validated here.
/// - **Delegated**: an upstream gatekeeper has already validated the token and
///   forwards the account id in `trusted_identity_header`. The upstream must strip
///   that header from client requests.
pub struct AuthService {
    credentials: Arc<CredentialService>,
    trusted_identity_header: Option<HeaderName>,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `credentials` - token validator
    /// - `trusted_identity_header` - enables delegated mode when set
    pub fn new(
        credentials: Arc<CredentialService>,
        trusted_identity_header: Option<HeaderName>,
    ) -> Self {
        Self {
            credentials,
            trusted_identity_header,
        }
    }

    /// Authenticates a request for a protected endpoint.
    ///
    /// `bearer` is the token already extracted from the `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if:
    /// - The token is missing, malformed, expired or mis-signed (inline mode)
    /// - The forwarded identity is missing or empty (delegated mode)
    pub fn authenticate(&self, headers: &HeaderMap, bearer: Option<&str>) -> Result<String, AppError> {
        if let Some(header) = &self.trusted_identity_header {
            return match headers
                .get(header)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
            {
                Some(subject) if !subject.is_empty() => Ok(subject.to_string()),
                _ => Err(AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "Caller identity is missing" }),
                )),
            };
        }

        let token = bearer.filter(|t| !t.is_empty()).ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Authorization header is missing or invalid" }),
            )
        })?;

        self.credentials.validate_token(token)
    }

    /// Identifies the caller of an endpoint where authentication is optional.
    ///
    /// A missing or invalid token yields [`Caller::Anonymous`]; it never fails
    /// the request.
    pub fn identify(&self, token: Option<&str>) -> Caller {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Caller::Anonymous;
        };

        match self.credentials.validate_token(token) {
            Ok(subject) => Caller::Account(subject),
            Err(_) => {
                tracing::warn!("Ignoring invalid token, continuing anonymously");
                Caller::Anonymous
            }
        }
    }
}
