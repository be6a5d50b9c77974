//! PostgreSQL implementation of the link repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::StorageError;

/// PostgreSQL-backed link storage.
///
/// The `short_links` table has a primary key on `id` and a secondary index
/// on `link_url` (see `migrations/`). The id-uniqueness guarantee comes from
/// `INSERT ... ON CONFLICT (id) DO NOTHING`: a conflicting insert affects
/// zero rows and is reported as [`StorageError::AlreadyExists`] without ever
/// touching the existing record.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: String,
    link_url: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
}

impl From<LinkRow> for ShortLink {
    fn from(row: LinkRow) -> Self {
        ShortLink {
            id: row.id,
            link_url: row.link_url,
            created_at: row.created_at,
            expires_at: row.expires_at,
        }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, link: &ShortLink) -> Result<(), StorageError> {
        let result = sqlx::query(
            r#"
            INSERT INTO short_links (id, link_url, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(&link.id)
        .bind(&link.link_url)
        .bind(link.created_at)
        .bind(link.expires_at)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::AlreadyExists {
                id: link.id.clone(),
            });
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ShortLink>, StorageError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, link_url, created_at, expires_at
            FROM short_links
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn find_by_url(&self, link_url: &str) -> Result<Vec<ShortLink>, StorageError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, link_url, created_at, expires_at
            FROM short_links
            WHERE link_url = $1
            ORDER BY created_at DESC, id ASC
            "#,
        )
        .bind(link_url)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShortLink::from).collect())
    }
}
