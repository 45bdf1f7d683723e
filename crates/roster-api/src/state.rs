//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use roster_core::config::AppConfig;
use roster_database::StoreHandle;
use roster_service::student::StudentService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Opened storage backend
    pub store: StoreHandle,
    /// Student service
    pub student_service: Arc<StudentService>,
}

impl AppState {
    /// Wires the student service onto the opened store.
    pub fn new(config: AppConfig, store: StoreHandle) -> Self {
        let student_service = Arc::new(StudentService::new(
            store.students(),
            config.students.clone(),
        ));

        Self {
            config: Arc::new(config),
            store,
            student_service,
        }
    }
}
