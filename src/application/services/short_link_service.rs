//! Short link creation and resolution service.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{CreateLinkInput, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, StorageError};
use crate::infrastructure::cache::LinkCache;
use crate::utils::id_generator::IdGenerator;

/// Default bound on create attempts when generated ids keep colliding.
pub const DEFAULT_MAX_CREATE_ATTEMPTS: u32 = 3;

/// Service-level configuration, validated by [`ShortLinkService::new`].
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// How many times `create` may retry after an id collision before
    /// giving up. Defaults to [`DEFAULT_MAX_CREATE_ATTEMPTS`]; must be ≥ 1.
    pub max_create_attempts: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_create_attempts: DEFAULT_MAX_CREATE_ATTEMPTS,
        }
    }
}

/// Orchestrates identifier generation, storage, and the read-through cache.
///
/// The service holds no lock around the generate-then-create sequence;
/// concurrent creators racing to the same id are resolved entirely by the
/// repository's atomic conflict detection. Every operation runs on the
/// caller's task, and dropping a returned future (for example when the
/// caller's deadline fires) cancels the work at its next await point — the
/// create retry loop awaits storage on every attempt, so cancellation always
/// lands between attempts.
pub struct ShortLinkService<R: LinkRepository> {
    repository: Arc<R>,
    cache: Arc<dyn LinkCache>,
    id_generator: IdGenerator,
    max_create_attempts: u32,
}

impl<R: LinkRepository> ShortLinkService<R> {
    /// Validates `config` and builds the service.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if `max_create_attempts` is zero.
    pub fn new(
        repository: Arc<R>,
        cache: Arc<dyn LinkCache>,
        id_generator: IdGenerator,
        config: ServiceConfig,
    ) -> Result<Self, AppError> {
        if config.max_create_attempts == 0 {
            return Err(AppError::config("max create attempts must be at least 1"));
        }

        Ok(Self {
            repository,
            cache,
            id_generator,
            max_create_attempts: config.max_create_attempts,
        })
    }

    /// Unconditionally creates a new short link, even when one with the same
    /// destination already exists.
    ///
    /// Each attempt generates a fresh id and hands it to the repository; an
    /// id collision is logged and retried with a new id, without backoff.
    /// Uniqueness is the repository's guarantee, not ours.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidLinkUrl`] if the destination is empty
    /// - [`AppError::IdGenerationExhausted`] if the generator ran out of
    ///   attempts (storage is never called in that case)
    /// - [`AppError::CreateAttemptsExhausted`] if every generated id collided
    /// - [`AppError::Storage`] for any other backend failure, immediately
    pub async fn create(&self, input: &CreateLinkInput) -> Result<ShortLink, AppError> {
        if input.link_url.is_empty() {
            return Err(AppError::InvalidLinkUrl);
        }

        for attempt in 1..=self.max_create_attempts {
            let id = self.id_generator.generate()?;
            let link = ShortLink::new(id, input.link_url.clone(), input.expires_at);

            match self.repository.create(&link).await {
                Ok(()) => {
                    debug!(id = %link.id, attempt, "created short link");
                    return Ok(link);
                }
                Err(StorageError::AlreadyExists { id }) => {
                    warn!(id = %id, attempt, "generated id collided, retrying with a fresh id");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::CreateAttemptsExhausted {
            attempts: self.max_create_attempts,
        })
    }

    /// Returns an existing short link whose destination *and* expiry both
    /// exactly equal the input, or creates a new one.
    ///
    /// No normalization is applied to the URL — `https://example.com?a=1&b=2`
    /// and `https://example.com?b=2&a=1` never match. When several stored
    /// links match, the repository's documented order (most recently created
    /// first, ties by id) decides which one is returned.
    pub async fn get_or_create(&self, input: &CreateLinkInput) -> Result<ShortLink, AppError> {
        if input.link_url.is_empty() {
            return Err(AppError::InvalidLinkUrl);
        }

        let existing = self.repository.find_by_url(&input.link_url).await?;

        if let Some(link) = existing
            .into_iter()
            .find(|l| l.link_url == input.link_url && l.expires_at == input.expires_at)
        {
            debug!(id = %link.id, "reusing existing short link");
            return Ok(link);
        }

        self.create(input).await
    }

    /// Looks up a short link by id, straight from storage.
    ///
    /// Not-found is `Ok(None)`, never an error. Expired links are returned
    /// as found; expiry is the caller's read-time predicate
    /// ([`ShortLink::is_expired`]).
    pub async fn get_by_id(&self, id: &str) -> Result<Option<ShortLink>, AppError> {
        if id.is_empty() {
            return Err(AppError::InvalidShortLinkId);
        }

        Ok(self.repository.find_by_id(id).await?)
    }

    /// Looks up a short link by id through the read-through cache.
    ///
    /// A hit never touches storage. On a miss the repository is queried and
    /// a found record is inserted into the cache; a not-found result is not
    /// cached, so every miss for an unknown id re-queries storage.
    pub async fn get_by_id_cached(&self, id: &str) -> Result<Option<ShortLink>, AppError> {
        if id.is_empty() {
            return Err(AppError::InvalidShortLinkId);
        }

        if let Some(link) = self.cache.get(id).await {
            return Ok(Some(link));
        }

        let link = self.repository.find_by_id(id).await?;

        if let Some(link) = &link {
            self.cache.insert(link.clone()).await;
        }

        Ok(link)
    }

    /// Returns every short link pointing at `link_url`, exact match only,
    /// in the repository's documented order.
    pub async fn get_by_url(&self, link_url: &str) -> Result<Vec<ShortLink>, AppError> {
        if link_url.is_empty() {
            return Err(AppError::InvalidLinkUrl);
        }

        Ok(self.repository.find_by_url(link_url).await?)
    }
}
