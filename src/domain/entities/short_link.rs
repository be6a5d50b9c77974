//! ShortLink entity representing an issued identifier-to-URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable record mapping a generated identifier to a destination URL.
///
/// Records are created exactly once and never mutated or deleted. Expiry is a
/// read-time predicate ([`ShortLink::is_expired`]), not a storage-state
/// transition: storage and cache keep returning an expired record as found,
/// and the caller decides what to do with it.
///
/// The serialized shape is the wire/storage shape:
/// `{"id", "linkUrl", "createdAt", "expiresAt"?}` with RFC3339 UTC
/// timestamps; `expiresAt` is omitted when the link never expires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLink {
    pub id: String,
    pub link_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShortLink {
    /// Builds a record with `created_at` set to the current UTC time.
    pub fn new(id: String, link_url: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id,
            link_url,
            created_at: Utc::now(),
            expires_at,
        }
    }

    /// Returns true if the link has passed its expiry time.
    ///
    /// A link without `expires_at` never expires.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }
}

/// Input for creating a short link.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkInput {
    pub link_url: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl CreateLinkInput {
    /// Convenience constructor for a link that never expires.
    pub fn new(link_url: impl Into<String>) -> Self {
        Self {
            link_url: link_url.into(),
            expires_at: None,
        }
    }
}
