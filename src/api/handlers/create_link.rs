//! Handler for link creation endpoint.

use axum::{Json, body::Bytes, extract::State};
use validator::Validate;

use crate::api::dto::create_link::{CreateLinkRequest, CreateLinkResponse};
use crate::error::{AppError, INVALID_BODY, URL_REQUIRED};
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "url": "https://example.com", "slug": "aB3xY9" }
/// ```
///
/// # Errors
///
/// The body is parsed as JSON whatever the `Content-Type` header says.
///
/// - 400 `Invalid request body` if the body is not a JSON object of the expected shape
/// - 400 `URL is required` if `url` is empty or missing
/// - 500 `Could not generate unique slug` after repeated collisions
/// - 500 `Database error` on storage failures
pub async fn create_link_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreateLinkResponse>, AppError> {
    let payload: CreateLinkRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "rejected request body");
        AppError::InvalidInput(INVALID_BODY)
    })?;

    payload
        .validate()
        .map_err(|_| AppError::InvalidInput(URL_REQUIRED))?;

    let link = state.link_service.create_short_link(&payload.url).await?;

    Ok(Json(link.into()))
}
