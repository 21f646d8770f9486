//! Shared application state for the LeadLab server.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`.

use std::sync::Arc;

use leadlab_storage::LeadStore;

/// Shared application state passed to all HTTP handlers.
pub struct AppState {
    /// Store that captured leads are recorded through.
    pub store: Arc<dyn LeadStore>,
    /// Cap on listing results.
    pub list_limit: usize,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("list_limit", &self.list_limit)
            .finish_non_exhaustive()
    }
}
