//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its ownership and click counter.
///
/// `expires_at` and `view_once` are recorded as provided by the creator but
/// play no part in resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub code: String,
    pub original_url: String,
    pub owner_id: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub view_once: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        original_url: String,
        owner_id: Option<String>,
        created_at: DateTime<Utc>,
        clicks: i64,
    ) -> Self {
        Self {
            code,
            original_url,
            owner_id,
            expires_at: None,
            view_once: None,
            created_at,
            clicks,
        }
    }

    /// Returns true if the link was created by an authenticated caller.
    pub fn is_owned(&self) -> bool {
        self.owner_id.is_some()
    }

    pub fn is_owned_by(&self, account_id: &str) -> bool {
        self.owner_id.as_deref() == Some(account_id)
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
    pub owner_id: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub view_once: Option<bool>,
}

impl NewLink {
    /// Materializes the link as freshly stored: zero clicks, created at `created_at`.
    pub fn into_link(self, created_at: DateTime<Utc>) -> Link {
        Link {
            code: self.code,
            original_url: self.original_url,
            owner_id: self.owner_id,
            expires_at: self.expires_at,
            view_once: self.view_once,
            created_at,
            clicks: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            None,
            now,
            0,
        );

        assert_eq!(link.code, "abc123");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.created_at, now);
        assert_eq!(link.clicks, 0);
        assert!(!link.is_owned());
        assert!(link.expires_at.is_none());
        assert!(link.view_once.is_none());
    }

    #[test]
    fn test_link_ownership() {
        let link = Link::new(
            "mine".to_string(),
            "https://example.com".to_string(),
            Some("user-1".to_string()),
            Utc::now(),
            3,
        );

        assert!(link.is_owned());
        assert!(link.is_owned_by("user-1"));
        assert!(!link.is_owned_by("user-2"));
    }

    #[test]
    fn test_new_link_into_link_starts_at_zero_clicks() {
        let expiry = Utc::now() + chrono::Duration::days(1);
        let new_link = NewLink {
            code: "xyz789".to_string(),
            original_url: "https://rust-lang.org".to_string(),
            owner_id: Some("owner".to_string()),
            expires_at: Some(expiry),
            view_once: Some(true),
        };

        let now = Utc::now();
        let link = new_link.into_link(now);

        assert_eq!(link.code, "xyz789");
        assert_eq!(link.clicks, 0);
        assert_eq!(link.created_at, now);
        assert_eq!(link.expires_at, Some(expiry));
        assert_eq!(link.view_once, Some(true));
        assert!(link.is_owned_by("owner"));
    }
}
