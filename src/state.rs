//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;

/// Application state cloned per request.
///
/// Holds no mutable data; all shared state lives in the store behind
/// [`LinkService`].
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }
}
