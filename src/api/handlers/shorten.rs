//! Handler for short URL creation.

use axum::{Json, extract::State};

use crate::api::dto::shorturl::ShortenRequest;
use crate::domain::entities::ShortlinkEntry;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short URL for a submitted URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// JSON `{"url": "https://example.com"}` or form-encoded `url=https%3A%2F%2Fexample.com`.
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com", "short_url": 1 }
/// ```
///
/// Submitting the same string again returns the same `short_url`.
///
/// # Errors
///
/// Responds `200 {"error":"invalid url"}` when the URL is missing, malformed,
/// not http(s), or its host does not resolve.
pub async fn shorten_handler(
    State(state): State<AppState>,
    request: ShortenRequest,
) -> Result<Json<ShortlinkEntry>, AppError> {
    let entry = state.shortlink_service.shorten(request.url.as_deref()).await?;

    Ok(Json(entry))
}
