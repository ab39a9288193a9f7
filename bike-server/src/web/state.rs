//! Application state for the web layer.

use std::sync::Arc;

use crate::provider::StationSource;

/// Shared application state.
pub struct AppState<S> {
    /// Where station lists come from
    pub source: Arc<S>,

    /// Provider contract to query
    pub contract: Arc<str>,
}

impl<S: StationSource> AppState<S> {
    /// Create a new app state.
    pub fn new(source: S, contract: impl Into<Arc<str>>) -> Self {
        Self {
            source: Arc::new(source),
            contract: contract.into(),
        }
    }
}

// Derived Clone would require `S: Clone`.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            contract: Arc::clone(&self.contract),
        }
    }
}
