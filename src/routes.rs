//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`        - Create a short link
//! - `GET  /health`  - Health check
//! - `GET  /{slug}`  - Short link redirect
//!
//! # Middleware
//!
//! - **CORS** - Any origin, `GET`/`POST`/`OPTIONS`
//! - **Tracing** - Structured request/response logging

use crate::api::handlers::{create_link_handler, health_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};

/// Constructs the application router with all routes and middleware.
///
/// Trailing-slash normalization is applied around the router by
/// [`crate::server::run`], since it has to run before routing.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(create_link_handler))
        .route("/health", get(health_handler))
        .route("/{slug}", get(redirect_handler))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}
