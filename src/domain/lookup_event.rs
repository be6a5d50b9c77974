//! Lookup event model for asynchronous tracking.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::ShortLink;

/// A snapshot of one resolution attempt, handed to the tracking worker.
///
/// Built by the embedding application after a lookup completes and sent to a
/// bounded channel; the response to the end user never waits on it. If the
/// queue is full the event is dropped (fire-and-forget).
///
/// `target_url` is the stored destination, which is not necessarily the URL
/// the caller redirected to (`response_location`) — a fallback redirect for a
/// missing or expired link points elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupEvent {
    pub short_link_id: String,
    pub found: bool,
    pub expired: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub request_metadata: HashMap<String, String>,
    pub requested_at: DateTime<Utc>,
    pub response_status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_location: Option<String>,
}

impl LookupEvent {
    /// Derives an event from a lookup result.
    ///
    /// `found`, `expired`, and `target_url` come from the resolved link (a
    /// missing link is not-found, not-expired, with no target);
    /// `requested_at` is stamped here.
    pub fn from_lookup(
        short_link_id: impl Into<String>,
        link: Option<&ShortLink>,
        request_metadata: HashMap<String, String>,
        response_status_code: u16,
        response_location: Option<String>,
    ) -> Self {
        Self {
            short_link_id: short_link_id.into(),
            found: link.is_some(),
            expired: link.is_some_and(ShortLink::is_expired),
            target_url: link.map(|l| l.link_url.clone()),
            request_metadata,
            requested_at: Utc::now(),
            response_status_code,
            response_location,
        }
    }
}
