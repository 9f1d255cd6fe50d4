//! Cross-origin resource sharing middleware.

use tower_http::cors::{Any, CorsLayer};

/// Allows any origin to call the API.
///
/// Browser clients on other origins (for example automated test runners
/// checking the API) need `Access-Control-Allow-Origin: *` on every response
/// and a successful preflight.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
