//! Wire representation of a short link.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Short link as returned by `POST /shorten` and `GET /me`.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub short_code: String,
    pub original_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Unix seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_once: Option<bool>,

    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            short_code: link.code,
            original_url: link.original_url,
            user_id: link.owner_id,
            expiry_date: link.expires_at.map(|at| at.timestamp()),
            view_once: link.view_once,
            created_at: link.created_at,
            clicks: link.clicks,
        }
    }
}
