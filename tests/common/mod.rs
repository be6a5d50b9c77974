//! Shared helpers for integration tests.

use std::sync::Arc;

use shortlink::prelude::*;

/// Builds a service over the in-memory backend with a small real cache.
pub fn memory_service() -> ShortLinkService<MemoryLinkRepository> {
    memory_service_with_repository(Arc::new(MemoryLinkRepository::new()))
}

/// Builds a service sharing the given repository, so tests can inspect or
/// pre-seed storage behind the service.
pub fn memory_service_with_repository(
    repository: Arc<MemoryLinkRepository>,
) -> ShortLinkService<MemoryLinkRepository> {
    ShortLinkService::new(
        repository,
        Arc::new(MemoryCache::new(128).expect("cache capacity is valid")),
        IdGenerator::new(IdGeneratorConfig::default()).expect("default config is valid"),
        ServiceConfig::default(),
    )
    .expect("default service config is valid")
}
