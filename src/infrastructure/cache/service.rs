//! Cache trait for the hot lookup path.

use async_trait::async_trait;

use crate::domain::entities::ShortLink;

/// A bounded cache of full [`ShortLink`] snapshots, keyed by id.
///
/// Implementations must be safe for concurrent reads and writes from many
/// tasks without external synchronization. Because records are immutable,
/// there is no invalidation: an entry stays valid for the life of the
/// process, and a cached link whose expiry has passed is still returned as
/// found — expiry is the caller's read-time predicate, not the cache's.
///
/// Only successful lookups are cached; misses are never stored (no negative
/// caching), so every miss re-queries storage. Concurrent misses for one id
/// each hit storage once — there is no single-flight de-duplication.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - bounded in-process cache
/// - [`crate::infrastructure::cache::NullCache`] - no-op for disabled caching
#[async_trait]
pub trait LinkCache: Send + Sync {
    /// Returns the cached link for `id`, if present.
    async fn get(&self, id: &str) -> Option<ShortLink>;

    /// Stores a link snapshot under its id, evicting old entries when the
    /// cache is at capacity.
    async fn insert(&self, link: ShortLink);
}
