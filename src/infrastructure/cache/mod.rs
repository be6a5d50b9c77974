//! Read-through caching for short link lookups.
//!
//! Provides a [`LinkCache`] trait with two implementations:
//! - [`MemoryCache`] - bounded in-process cache (the production default)
//! - [`NullCache`] - no-op implementation for disabled caching

mod memory_cache;
mod null_cache;
mod service;

pub use memory_cache::{DEFAULT_CACHE_CAPACITY, MemoryCache};
pub use null_cache::NullCache;
pub use service::LinkCache;
