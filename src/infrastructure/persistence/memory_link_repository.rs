//! In-memory implementation of the link repository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::StorageError;

/// Link storage backed by in-process hash maps.
///
/// Intended for tests and development only — nothing is persisted and there
/// is no sharing between processes. Unlike some throwaway stores it does
/// enforce the `create` conflict contract, so the service's collision-retry
/// path behaves the same against it as against PostgreSQL.
///
/// `find_by_url` returns the same documented order as the production
/// backend: most recently created first, ties broken by `id` ascending.
#[derive(Default)]
pub struct MemoryLinkRepository {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    by_id: HashMap<String, ShortLink>,
    // link_url -> ids, in insertion order
    by_url: HashMap<String, Vec<String>>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.state.read().map(|s| s.by_id.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, link: &ShortLink) -> Result<(), StorageError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| StorageError::backend("memory store lock poisoned"))?;

        if state.by_id.contains_key(&link.id) {
            return Err(StorageError::AlreadyExists {
                id: link.id.clone(),
            });
        }

        state.by_id.insert(link.id.clone(), link.clone());
        state
            .by_url
            .entry(link.link_url.clone())
            .or_default()
            .push(link.id.clone());

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ShortLink>, StorageError> {
        let state = self
            .state
            .read()
            .map_err(|_| StorageError::backend("memory store lock poisoned"))?;

        Ok(state.by_id.get(id).cloned())
    }

    async fn find_by_url(&self, link_url: &str) -> Result<Vec<ShortLink>, StorageError> {
        let state = self
            .state
            .read()
            .map_err(|_| StorageError::backend("memory store lock poisoned"))?;

        let mut links: Vec<ShortLink> = state
            .by_url
            .get(link_url)
            .into_iter()
            .flatten()
            .filter_map(|id| state.by_id.get(id).cloned())
            .collect();

        links.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(links)
    }
}
