//! Data transfer objects for web responses outside the assistant payload.

use serde::Serialize;

/// Body of a non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
