//! Station provider error types.

use std::sync::Arc;

/// Errors that can occur when fetching stations from the provider.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider rejected the API key
    #[error("unauthorized: check STATIONS_API_KEY")]
    Unauthorized,

    /// Provider returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Failure of a fetch shared by several concurrent callers
    #[error(transparent)]
    Shared(Arc<StationError>),
}

impl From<Arc<StationError>> for StationError {
    /// Unwrap when this caller holds the only reference.
    fn from(err: Arc<StationError>) -> Self {
        Arc::try_unwrap(err).unwrap_or_else(StationError::Shared)
    }
}
