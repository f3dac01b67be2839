use crate::observability::AppMetrics;
use crate::services::timetable::TimetableService;
use std::sync::Arc;

/// Application state shared by all handlers
///
/// Created once at startup; holds no mutable request-to-request state
/// beyond the atomic metrics counters.
#[derive(Clone)]
pub struct AppState {
    /// Timetable service wrapping recognition and the resolution engine
    pub timetable_service: Arc<dyn TimetableService>,
    /// Metrics shared with the observability router
    pub metrics: Arc<AppMetrics>,
    /// Maximum accepted image size in bytes
    pub max_upload_size: usize,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("timetable_service", &"Arc<dyn TimetableService>")
            .field("metrics", &self.metrics)
            .field("max_upload_size", &self.max_upload_size)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        timetable_service: Box<dyn TimetableService>,
        metrics: Arc<AppMetrics>,
        max_upload_size: usize,
    ) -> Self {
        Self {
            timetable_service: Arc::from(timetable_service),
            metrics,
            max_upload_size,
        }
    }
}
