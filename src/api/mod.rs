//! HTTP gateway layer.
//!
//! Translates HTTP requests into [`crate::application::services::LinkService`]
//! calls and formats the responses.
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
