//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::error::{AppError, URL_REQUIRED};
use crate::utils::slug_generator::{DEFAULT_SLUG_LENGTH, generate_slug};

/// Number of slug candidates tried before giving up.
pub const MAX_ATTEMPTS: usize = 5;

/// Slugs that would be shadowed by fixed routes.
const RESERVED_SLUGS: &[&str] = &["health"];

/// Outcome of a single insert attempt on the create path.
#[derive(Debug)]
enum InsertAttempt {
    Created(ShortLink),
    Collision,
    Failed(AppError),
}

/// Service for creating and resolving short links.
///
/// Holds the store explicitly; there is no process-wide handle.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    slug_length: usize,
}

impl LinkService {
    /// Creates a service producing slugs of the default length.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self::with_slug_length(repository, DEFAULT_SLUG_LENGTH)
    }

    /// Creates a service producing slugs of `slug_length` characters.
    pub fn with_slug_length(repository: Arc<dyn LinkRepository>, slug_length: usize) -> Self {
        Self {
            repository,
            slug_length,
        }
    }

    pub fn slug_length(&self) -> usize {
        self.slug_length
    }

    /// Creates a short link with a freshly generated slug.
    ///
    /// # Collision Handling
    ///
    /// Tries up to [`MAX_ATTEMPTS`] candidates. A duplicate slug moves on to
    /// the next candidate; any other storage failure aborts immediately.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidInput`] if `long_url` is empty
    /// - [`AppError::SlugExhaustion`] if every candidate collided
    /// - [`AppError::Storage`] on a non-collision storage failure
    pub async fn create_short_link(&self, long_url: &str) -> Result<ShortLink, AppError> {
        if long_url.is_empty() {
            return Err(AppError::InvalidInput(URL_REQUIRED));
        }

        for attempt in 1..=MAX_ATTEMPTS {
            match self.try_insert(long_url).await {
                InsertAttempt::Created(link) => {
                    tracing::info!(slug = %link.slug, attempt, "short link created");
                    return Ok(link);
                }
                InsertAttempt::Collision => {
                    tracing::debug!(attempt, "slug collision, retrying");
                }
                InsertAttempt::Failed(err) => return Err(err),
            }
        }

        tracing::warn!(attempts = MAX_ATTEMPTS, "no unique slug found");
        Err(AppError::SlugExhaustion)
    }

    /// Resolves a slug to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the slug has no mapping.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn resolve(&self, slug: &str) -> Result<String, AppError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .map(|link| link.long_url)
            .ok_or(AppError::NotFound)
    }

    /// Number of stored links.
    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(self.repository.count().await?)
    }

    /// Checks that the store answers.
    pub async fn check_store(&self) -> Result<(), AppError> {
        Ok(self.repository.ping().await?)
    }

    async fn try_insert(&self, long_url: &str) -> InsertAttempt {
        match generate_slug(self.slug_length) {
            Ok(slug) => self.try_insert_slug(slug, long_url).await,
            Err(e) => InsertAttempt::Failed(AppError::Internal(e.into())),
        }
    }

    async fn try_insert_slug(&self, slug: String, long_url: &str) -> InsertAttempt {
        if RESERVED_SLUGS.contains(&slug.as_str()) {
            return InsertAttempt::Collision;
        }

        let link = ShortLink::new(slug, long_url);
        match self.repository.insert(&link).await {
            Ok(()) => InsertAttempt::Created(link),
            Err(StoreError::UniqueViolation) => InsertAttempt::Collision,
            Err(e) => InsertAttempt::Failed(AppError::Storage(e)),
        }
    }
}
