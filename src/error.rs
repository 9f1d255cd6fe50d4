//! Request-level error type and its HTTP rendering.
//!
//! Clients built against this service expect failures as HTTP 200 with a
//! single `error` field, so every variant renders that way. The detailed
//! reason is logged and never sent.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::debug;

use crate::application::services::url_validator::InvalidUrl;

/// Message for rejected URLs and malformed identifiers.
pub const INVALID_URL_MESSAGE: &str = "invalid url";

/// Message for well-formed identifiers with no entry.
pub const NOT_FOUND_MESSAGE: &str = "No short URL found for the given input";

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] InvalidUrl),

    #[error("identifier {0:?} is not an integer")]
    InvalidIdentifier(String),

    #[error("no short URL with identifier {0:?}")]
    NotFound(String),
}

impl AppError {
    /// The message clients see for this error.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidUrl(_) | AppError::InvalidIdentifier(_) => INVALID_URL_MESSAGE,
            AppError::NotFound(_) => NOT_FOUND_MESSAGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        debug!(reason = %self, "Request rejected");

        let body = ErrorBody {
            error: self.public_message(),
        };

        (StatusCode::OK, Json(body)).into_response()
    }
}
