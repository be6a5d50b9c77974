//! Repository trait for short link storage.

use crate::domain::entities::ShortLink;
use crate::error::StorageError;
use async_trait::async_trait;

/// Storage capability set for short links: {create, get-by-id, get-by-url}.
///
/// Records are immutable once stored; there is deliberately no update or
/// delete. Uniqueness of `id` is enforced here — by `create`'s conditional
/// write — and nowhere else.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL,
///   the production backend
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-memory
///   maps for tests and development
/// - Test mocks generated with `mockall` under `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a new short link.
    ///
    /// Must be atomic: a record with the same `id` is never silently
    /// overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AlreadyExists`] on an `id` conflict and
    /// [`StorageError::Backend`] on any other failure — the caller relies on
    /// that distinction to decide between "retry with a new id" and "fatal".
    async fn create(&self, link: &ShortLink) -> Result<(), StorageError>;

    /// Looks up a link by its identifier (the primary key).
    ///
    /// # Returns
    ///
    /// - `Ok(Some(link))` if found
    /// - `Ok(None)` if not found — absence is not an error
    async fn find_by_id(&self, id: &str) -> Result<Option<ShortLink>, StorageError>;

    /// Returns every link whose destination equals `link_url` exactly.
    ///
    /// No normalization is applied: `https://example.com?a=1&b=2` and
    /// `https://example.com?b=2&a=1` are different URLs. Results are ordered
    /// most recently created first, ties broken by `id` ascending; both
    /// implementations guarantee this order.
    async fn find_by_url(&self, link_url: &str) -> Result<Vec<ShortLink>, StorageError>;
}
