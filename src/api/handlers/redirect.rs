//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};
use url::Url;

use crate::application::services::InvalidUrl;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short URL identifier to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{id}`
///
/// # Response
///
/// `302 Found` with `Location` set to the original URL.
///
/// # Errors
///
/// - `200 {"error":"invalid url"}` if `id` is not an integer
/// - `200 {"error":"No short URL found for the given input"}` if no entry matches
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let entry = state.shortlink_service.resolve(&id).await?;
    debug!(short_url = entry.short_url, location = %entry.original_url, "Redirecting");

    found(&entry.original_url)
}

/// Builds a `302 Found` response pointing at `original_url`.
///
/// Stored URLs are kept as submitted and may contain characters a header
/// cannot carry; those are sent in the parser's percent-encoded form.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] if neither form fits in a header.
fn found(original_url: &str) -> Result<Response, AppError> {
    let location = match header_value(original_url) {
        Some(location) => location,
        None => {
            let parsed = Url::parse(original_url).map_err(InvalidUrl::from)?;
            header_value(parsed.as_str()).ok_or_else(|| {
                warn!(original_url, "Stored URL cannot be sent as a Location header");
                InvalidUrl::NotRedirectable
            })?
        }
    };

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

fn header_value(s: &str) -> Option<HeaderValue> {
    if !s.is_ascii() {
        return None;
    }
    HeaderValue::from_str(s).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_sets_location_verbatim() {
        let response = found("https://example.com/a?b=c").unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://example.com/a?b=c"
        );
    }

    #[test]
    fn test_found_percent_encodes_non_ascii() {
        let response = found("https://example.com/caf\u{e9}").unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://example.com/caf%C3%A9"
        );
    }

    #[test]
    fn test_found_rejects_unusable_location_as_invalid_url() {
        let result = found("caf\u{e9} is not a url");

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl(InvalidUrl::Malformed(_))));
        assert_eq!(err.public_message(), "invalid url");
    }
}
