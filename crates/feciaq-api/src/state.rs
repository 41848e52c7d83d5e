//! Shared application state.

use std::sync::Arc;

use feciaq_core::clock::Clock;
use feciaq_core::repository::WorkRepository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clock used to stamp accepted submissions.
    pub clock: Arc<dyn Clock>,
    /// Store for works and their authors.
    pub work_repository: Arc<dyn WorkRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, work_repository: Arc<dyn WorkRepository>) -> Self {
        Self {
            clock,
            work_repository,
        }
    }
}
