//! API route configuration.
//!
//! The API is public: there is no authentication or rate limiting.

use crate::api::handlers::{hello_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /hello`          - Greeting
/// - `POST /shorturl`       - Create a short URL
/// - `GET  /shorturl/{id}`  - Redirect to the original URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{id}", get(redirect_handler))
}
