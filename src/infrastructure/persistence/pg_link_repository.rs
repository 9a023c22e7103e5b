//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{LinkRepository, StoreError};

/// PostgreSQL repository for short link storage and lookup.
///
/// Each call borrows a connection from the pool for the duration of the
/// query only. Schema is managed by the embedded migrations in `migrations/`.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Classifies an insert failure, singling out primary-key conflicts.
fn classify_insert_error(e: sqlx::Error) -> StoreError {
    if let Some(db_err) = e.as_database_error()
        && db_err.is_unique_violation()
    {
        return StoreError::UniqueViolation;
    }

    StoreError::Database(e)
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, link: &ShortLink) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO short_urls (slug, long_url) VALUES ($1, $2)")
            .bind(&link.slug)
            .bind(&link.long_url)
            .execute(self.pool.as_ref())
            .await
            .map_err(classify_insert_error)?;

        Ok(())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortLink>, StoreError> {
        let long_url: Option<String> =
            sqlx::query_scalar("SELECT long_url FROM short_urls WHERE slug = $1")
                .bind(slug)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(long_url.map(|long_url| ShortLink::new(slug, long_url)))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
