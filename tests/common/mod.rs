#![allow(dead_code)]

use async_trait::async_trait;
use slug_shortener::application::services::LinkService;
use slug_shortener::domain::entities::ShortLink;
use slug_shortener::domain::repositories::{LinkRepository, StoreError};
use slug_shortener::state::AppState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory store with the same uniqueness semantics as the `short_urls`
/// primary key.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<HashMap<String, String>>,
    fail_with_database_error: bool,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails as if the connection dropped.
    pub fn broken() -> Self {
        Self {
            links: Mutex::default(),
            fail_with_database_error: true,
        }
    }

    pub fn seed(&self, slug: &str, long_url: &str) {
        self.links
            .lock()
            .unwrap()
            .insert(slug.to_string(), long_url.to_string());
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail_with_database_error {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, link: &ShortLink) -> Result<(), StoreError> {
        self.check()?;
        let mut links = self.links.lock().unwrap();
        if links.contains_key(&link.slug) {
            return Err(StoreError::UniqueViolation);
        }
        links.insert(link.slug.clone(), link.long_url.clone());
        Ok(())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortLink>, StoreError> {
        self.check()?;
        Ok(self
            .links
            .lock()
            .unwrap()
            .get(slug)
            .map(|long_url| ShortLink::new(slug, long_url.clone())))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.links.lock().unwrap().len() as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}

pub fn create_test_state(repository: Arc<InMemoryLinkRepository>) -> AppState {
    AppState::new(Arc::new(LinkService::new(repository)))
}
