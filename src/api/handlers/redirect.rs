//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its original URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// Responds with 307 Temporary Redirect and the stored URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the slug doesn't exist.
/// Returns 500 on database errors, or if the stored URL cannot be carried in
/// a header (control characters).
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.link_service.resolve(&slug).await?;

    let location = HeaderValue::from_bytes(long_url.as_bytes())
        .map_err(|e| AppError::Internal(e.into()))?;

    tracing::debug!(%slug, "redirecting");

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}
