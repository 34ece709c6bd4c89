//! Shared application state for axum handlers.

use std::sync::Arc;

use sensorboard_app::ports::RecordStore;
use sensorboard_app::services::record_service::RecordService;

/// Application state shared across all axum handlers.
///
/// Generic over the record store to avoid dynamic dispatch.
/// `Clone` is implemented manually so the store itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Record fetch service.
    pub record_service: Arc<RecordService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            record_service: Arc::clone(&self.record_service),
        }
    }
}

impl<S> AppState<S>
where
    S: RecordStore + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(record_service: RecordService<S>) -> Self {
        Self::from_arc(Arc::new(record_service))
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    pub fn from_arc(record_service: Arc<RecordService<S>>) -> Self {
        Self { record_service }
    }
}
