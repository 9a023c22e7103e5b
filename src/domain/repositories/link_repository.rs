//! Repository trait for short link data access.

use crate::domain::entities::ShortLink;
use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a [`LinkRepository`].
///
/// A duplicate slug is reported separately from every other storage failure
/// so the create path can retry on the former and give up on the latter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The slug is already taken (primary key conflict).
    #[error("slug already exists")]
    UniqueViolation,

    /// Connectivity loss, query failure, or any other database error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Repository interface for short link storage.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link.
    ///
    /// The row is committed before this returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] if the slug already exists.
    /// Returns [`StoreError::Database`] on any other failure.
    async fn insert(&self, link: &ShortLink) -> Result<(), StoreError>;

    /// Finds a link by exact slug match.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortLink>, StoreError>;

    /// Counts stored links.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Performs a cheap round-trip to the store.
    async fn ping(&self) -> Result<(), StoreError>;
}
