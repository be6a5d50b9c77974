//! Error taxonomy for the short link engine.
//!
//! Every failure is a returned [`Result`]; the core never panics. The split
//! between [`StorageError::AlreadyExists`] and [`StorageError::Backend`] is
//! structural on purpose: the create loop retries the former and propagates
//! the latter untouched, so callers never have to inspect message text.

use thiserror::Error;

/// Errors produced by a [`crate::domain::repositories::LinkRepository`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// A record with the same id is already stored. `create` never
    /// overwrites; the service recovers by generating a fresh id.
    #[error("short link '{id}' already exists")]
    AlreadyExists { id: String },

    /// Any other backend failure (connection, query, serialization).
    /// Never retried by the core.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StorageError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::Backend(err.to_string())
    }
}

/// Errors surfaced at the service boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// The destination URL was empty. Failed fast, never retried.
    #[error("link URL must not be empty")]
    InvalidLinkUrl,

    /// The requested short link id was empty. Failed fast, never retried.
    #[error("short link ID must not be empty")]
    InvalidShortLinkId,

    /// The identifier generator could not produce a candidate outside the
    /// denylist within its attempt budget. No storage call was made.
    #[error("exhausted {attempts} attempts to generate an ID that is not denylisted")]
    IdGenerationExhausted { attempts: u32 },

    /// Every generated id collided with an existing record.
    #[error("failed to create a short link after {attempts} attempts")]
    CreateAttemptsExhausted { attempts: u32 },

    /// A component was constructed with an invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A storage failure, propagated unchanged.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_is_distinct_from_backend() {
        let conflict = StorageError::AlreadyExists {
            id: "abc123".to_string(),
        };
        let io = StorageError::backend("connection reset");

        assert!(matches!(conflict, StorageError::AlreadyExists { .. }));
        assert!(matches!(io, StorageError::Backend(_)));
    }

    #[test]
    fn test_storage_error_wraps_into_app_error() {
        let err: AppError = StorageError::backend("boom").into();
        assert!(matches!(err, AppError::Storage(StorageError::Backend(_))));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AppError::InvalidLinkUrl.to_string(),
            "link URL must not be empty"
        );
        assert_eq!(
            AppError::CreateAttemptsExhausted { attempts: 3 }.to_string(),
            "failed to create a short link after 3 attempts"
        );
    }
}
