//! DTO for the greeting endpoint.

use serde::Serialize;

/// Fixed greeting used by clients to check the API is up.
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub greeting: &'static str,
}
