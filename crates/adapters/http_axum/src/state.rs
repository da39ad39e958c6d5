//! Shared application state for axum handlers.

use std::sync::Arc;

use mergington_app::services::directory_service::DirectoryService;

/// Application state shared across all axum handlers.
///
/// Handlers receive the directory service through this state rather than a
/// process-wide global, which keeps tests isolated: every test builds its
/// own catalog and its own state.
#[derive(Clone)]
pub struct AppState {
    /// Activity directory service.
    pub directory: Arc<DirectoryService>,
}

impl AppState {
    /// Create a new application state from a service instance.
    #[must_use]
    pub fn new(directory: DirectoryService) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service needs to be shared elsewhere before
    /// constructing the HTTP state.
    #[must_use]
    pub fn from_arc(directory: Arc<DirectoryService>) -> Self {
        Self { directory }
    }
}
