//! Application error type and its HTTP mapping.
//!
//! Every failure is translated at the gateway boundary into a status code and
//! a short plain-text body. Sources of 5xx errors are logged, never exposed.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::domain::repositories::StoreError;

pub const INVALID_BODY: &str = "Invalid request body";
pub const URL_REQUIRED: &str = "URL is required";

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed body or missing URL.
    #[error("{0}")]
    InvalidInput(&'static str),

    /// Every slug candidate collided.
    #[error("Could not generate unique slug")]
    SlugExhaustion,

    #[error("URL not found")]
    NotFound,

    #[error("Database error")]
    Storage(#[source] StoreError),

    /// Failures that are neither the client's nor the store's
    /// (random source, unusable redirect target).
    #[error("Internal server error")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::SlugExhaustion | AppError::Storage(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Storage(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Storage(source) => tracing::error!(error = %source, "storage failure"),
            AppError::Internal(source) => tracing::error!(error = %source, "internal failure"),
            AppError::SlugExhaustion => tracing::error!("slug attempts exhausted"),
            AppError::InvalidInput(_) | AppError::NotFound => {}
        }

        (status, self.to_string()).into_response()
    }
}
