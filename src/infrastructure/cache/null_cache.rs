//! No-op cache implementation for disabled caching.

use async_trait::async_trait;
use tracing::debug;

use super::service::LinkCache;
use crate::domain::entities::ShortLink;

/// A cache that stores nothing.
///
/// Every `get` is a miss, so cached lookups degrade to plain storage
/// lookups. Useful for tests and for deployments that want the cached code
/// path without the memory footprint.
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        debug!("using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkCache for NullCache {
    async fn get(&self, _id: &str) -> Option<ShortLink> {
        None
    }

    async fn insert(&self, _link: ShortLink) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_cache_never_stores() {
        let cache = NullCache::new();

        cache
            .insert(ShortLink::new(
                "abc".to_string(),
                "https://example.com".to_string(),
                None,
            ))
            .await;

        assert!(cache.get("abc").await.is_none());
    }
}
