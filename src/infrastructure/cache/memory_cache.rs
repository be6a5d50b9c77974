//! Bounded in-process cache implementation.

use async_trait::async_trait;
use moka::sync::Cache;
use tracing::debug;

use super::service::LinkCache;
use crate::domain::entities::ShortLink;
use crate::error::AppError;

/// Default number of cached links when no capacity is configured.
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

/// In-process cache backed by `moka`, bounded by entry count.
///
/// Eviction is recency/frequency based (moka's TinyLFU, an LRU-family
/// policy); entries have no TTL and are never invalidated, since records are
/// immutable. The cache is lock-free for readers and safe to share across
/// tasks.
pub struct MemoryCache {
    inner: Cache<String, ShortLink>,
}

impl MemoryCache {
    /// Builds a cache holding at most `capacity` links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if `capacity` is zero.
    pub fn new(capacity: u64) -> Result<Self, AppError> {
        if capacity == 0 {
            return Err(AppError::config("cache capacity must be at least 1"));
        }

        Ok(Self {
            inner: Cache::builder().max_capacity(capacity).build(),
        })
    }

    /// Number of entries currently cached (approximate under concurrency).
    pub fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }
}

#[async_trait]
impl LinkCache for MemoryCache {
    async fn get(&self, id: &str) -> Option<ShortLink> {
        let hit = self.inner.get(id);
        debug!(id = %id, hit = hit.is_some(), "cache lookup");
        hit
    }

    async fn insert(&self, link: ShortLink) {
        self.inner.insert(link.id.clone(), link);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_link(id: &str) -> ShortLink {
        ShortLink::new(id.to_string(), format!("https://example.com/{id}"), None)
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let cache = MemoryCache::new(16).unwrap();

        cache.insert(sample_link("abc123")).await;

        let hit = cache.get("abc123").await.unwrap();
        assert_eq!(hit.id, "abc123");
        assert_eq!(hit.link_url, "https://example.com/abc123");
    }

    #[tokio::test]
    async fn test_miss_returns_none() {
        let cache = MemoryCache::new(16).unwrap();
        assert!(cache.get("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_capacity_is_enforced() {
        let cache = MemoryCache::new(8).unwrap();

        for i in 0..64 {
            cache.insert(sample_link(&format!("id-{i}"))).await;
        }

        assert!(cache.entry_count() <= 8);
    }

    #[tokio::test]
    async fn test_expired_links_are_still_returned() {
        let cache = MemoryCache::new(16).unwrap();

        let mut link = sample_link("abc123");
        link.expires_at = Some(chrono::Utc::now() - chrono::Duration::seconds(10));
        cache.insert(link).await;

        // Expiry is the caller's concern; the cache keeps serving the entry.
        let hit = cache.get("abc123").await.unwrap();
        assert!(hit.is_expired());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert!(matches!(MemoryCache::new(0), Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_concurrent_access() {
        use std::sync::Arc;

        let cache = Arc::new(MemoryCache::new(1024).unwrap());

        let mut handles = Vec::new();
        for task in 0..8 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..100 {
                    let id = format!("t{task}-{i}");
                    cache.insert(sample_link(&id)).await;
                    assert!(cache.get(&id).await.is_some());
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }
    }
}
