//! Password hashing and access token issuance.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// The only algorithm tokens are signed and accepted with.
const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT claims carried by access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Hashes passwords with argon2 and signs stateless HS256 access tokens.
///
/// Token validity depends only on the signature and the `exp` claim; nothing is
/// looked up in storage.
pub struct CredentialService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
}

impl CredentialService {
    /// Creates a credential service.
    ///
    /// # Arguments
    ///
    /// - `signing_secret` - HMAC key shared by every instance of the service
    /// - `token_ttl` - lifetime of issued tokens
    pub fn new(signing_secret: &str, token_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(signing_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(signing_secret.as_bytes()),
            token_ttl,
        }
    }

    /// Produces a salted argon2id hash in PHC string format.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the hasher fails.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!("Failed to hash password: {}", e);
                AppError::internal("Failed to hash password", json!({}))
            })
    }

    /// Checks a password against a stored hash.
    ///
    /// A malformed stored hash counts as a mismatch.
    pub fn verify_password(&self, password: &str, password_hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(password_hash) else {
            tracing::error!("Stored password hash could not be parsed");
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    /// Issues a token for `subject`, valid from now for the configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue_token(&self, subject: &str) -> Result<String, AppError> {
        self.issue_token_at(subject, Utc::now())
    }

    fn issue_token_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String, AppError> {
        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.token_ttl).timestamp(),
        };

        encode(&Header::new(TOKEN_ALGORITHM), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign token: {}", e);
            AppError::internal("Failed to generate token", json!({}))
        })
    }

    /// Verifies a token and returns its subject.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, expired,
    /// signed with another key or algorithm, or has an empty subject.
    pub fn validate_token(&self, token: &str) -> Result<String, AppError> {
        let mut validation = Validation::new(TOKEN_ALGORITHM);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("Token rejected: {}", e);
            invalid_token()
        })?;

        if data.claims.sub.is_empty() {
            return Err(invalid_token());
        }

        Ok(data.claims.sub)
    }
}

fn invalid_token() -> AppError {
    AppError::unauthorized("Unauthorized", json!({ "reason": "Invalid or expired token" }))
}
