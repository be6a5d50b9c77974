//! # Shortlink
//!
//! Core engine for issuing and resolving short, URL-safe link identifiers.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entities::ShortLink`]
//!   entity, the storage trait, and the lookup-tracking boundary
//! - **Application Layer** ([`application`]) - The
//!   [`application::services::ShortLinkService`] orchestrating generation,
//!   storage, and caching
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL and
//!   in-memory storage backends, bounded in-process cache
//! - **Utilities** ([`utils`]) - Denylist-filtered random identifier
//!   generation
//!
//! HTTP routing, authentication, and CLI handling are deliberately not here;
//! embedding applications consume the service API and the lookup-tracking
//! channel.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use shortlink::application::services::{ServiceConfig, ShortLinkService};
//! use shortlink::domain::entities::CreateLinkInput;
//! use shortlink::infrastructure::cache::MemoryCache;
//! use shortlink::infrastructure::persistence::MemoryLinkRepository;
//! use shortlink::utils::id_generator::{IdGenerator, IdGeneratorConfig};
//!
//! # async fn run() -> Result<(), shortlink::AppError> {
//! let service = ShortLinkService::new(
//!     Arc::new(MemoryLinkRepository::new()),
//!     Arc::new(MemoryCache::new(10_000)?),
//!     IdGenerator::new(IdGeneratorConfig::default())?,
//!     ServiceConfig::default(),
//! )?;
//!
//! let link = service
//!     .create(&CreateLinkInput::new("https://example.com"))
//!     .await?;
//! let resolved = service.get_by_id_cached(&link.id).await?;
//! assert_eq!(resolved.as_ref(), Some(&link));
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Runtime configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;
pub mod utils;

pub use error::{AppError, StorageError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ServiceConfig, ShortLinkService};
    pub use crate::domain::entities::{CreateLinkInput, ShortLink};
    pub use crate::domain::lookup_event::LookupEvent;
    pub use crate::domain::lookup_worker::{LookupTracker, run_lookup_worker};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::{AppError, StorageError};
    pub use crate::infrastructure::cache::{LinkCache, MemoryCache, NullCache};
    pub use crate::infrastructure::persistence::{MemoryLinkRepository, PgLinkRepository};
    pub use crate::utils::denylist::Denylist;
    pub use crate::utils::id_generator::{IdGenerator, IdGeneratorConfig};
}
