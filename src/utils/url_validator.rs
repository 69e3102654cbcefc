//! Redirect target validation.
//!
//! Targets are stored exactly as submitted; they are only checked, never
//! rewritten, so that a resolved link redirects to the byte-identical URL.

use url::Url;

/// Errors that can occur while validating a redirect target.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL must not contain whitespace padding or control characters")]
    InvalidCharacters,
}

/// Checks that `input` is an absolute HTTP(S) URL with a host.
///
/// # Security
///
/// Rejects potentially dangerous protocols like `javascript:`, `data:`, `file:`, etc.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`UrlValidationError::MissingHost`] when the host is empty.
/// Returns [`UrlValidationError::InvalidCharacters`] for surrounding whitespace
/// or ASCII control characters, which the parser would silently drop.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input != input.trim() || input.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlValidationError::InvalidCharacters);
    }

    let url = Url::parse(input)
        .map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}
