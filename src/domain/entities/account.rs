//! Account entity for registered users.

use chrono::{DateTime, Utc};
use std::fmt;

/// A registered user.
///
/// `password_hash` holds an argon2 PHC string and never leaves the service.
#[derive(Clone, PartialEq)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new Account instance.
    pub fn new(id: String, email: String, password_hash: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email,
            password_hash,
            created_at,
        }
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Input data for creating a new account.
#[derive(Clone)]
pub struct NewAccount {
    pub id: String,
    pub email: String,
    pub password_hash: String,
}

impl NewAccount {
    pub fn into_account(self, created_at: DateTime<Utc>) -> Account {
        Account::new(self.id, self.email, self.password_hash, created_at)
    }
}

impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("id", &self.id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password_hash() {
        let account = Account::new(
            "id-1".to_string(),
            "a@b.com".to_string(),
            "$argon2id$v=19$secret".to_string(),
            Utc::now(),
        );

        let rendered = format!("{:?}", account);
        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("secret"));

        let new_account = NewAccount {
            id: "id-2".to_string(),
            email: "c@d.com".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
        };
        assert!(!format!("{:?}", new_account).contains("secret"));
    }

    #[test]
    fn test_new_account_into_account() {
        let now = Utc::now();
        let account = NewAccount {
            id: "id-1".to_string(),
            email: "a@b.com".to_string(),
            password_hash: "hash".to_string(),
        }
        .into_account(now);

        assert_eq!(account.id, "id-1");
        assert_eq!(account.email, "a@b.com");
        assert_eq!(account.created_at, now);
    }
}
