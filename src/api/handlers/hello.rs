//! Handler for the greeting endpoint.

use axum::Json;

use crate::api::dto::hello::GreetingResponse;

/// Returns a fixed greeting.
///
/// # Endpoint
///
/// `GET /api/hello`
///
/// # Response
///
/// ```json
/// { "greeting": "hello API" }
/// ```
pub async fn hello_handler() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        greeting: "hello API",
    })
}
