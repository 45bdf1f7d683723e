//! Store handle that dispatches to the configured storage provider.

use std::sync::Arc;

use tracing::info;

use roster_core::config::DatabaseConfig;
use roster_core::error::AppError;
use roster_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::migration::run_migrations;
use crate::repositories::student::{
    MemoryStudentRepository, PgStudentRepository, StudentRepository,
};

/// Owns the opened storage backend and the student repository built on it.
///
/// The provider is selected at construction time from `database.provider`.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    students: Arc<dyn StudentRepository>,
    pool: Option<DatabasePool>,
}

impl StoreHandle {
    /// Open the configured provider. PostgreSQL stores are migrated before
    /// the handle is returned.
    pub async fn open(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL student store");
                let pool = DatabasePool::connect(config).await?;
                run_migrations(pool.pool()).await?;
                let students = Arc::new(PgStudentRepository::new(pool.pool().clone()));
                Ok(Self {
                    students,
                    pool: Some(pool),
                })
            }
            "memory" => {
                info!("Initializing in-memory student store");
                Ok(Self::in_memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Create a handle over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::from_repository(Arc::new(MemoryStudentRepository::new()))
    }

    /// Create a handle from an existing repository (for testing).
    pub fn from_repository(students: Arc<dyn StudentRepository>) -> Self {
        Self {
            students,
            pool: None,
        }
    }

    /// The student repository.
    pub fn students(&self) -> Arc<dyn StudentRepository> {
        Arc::clone(&self.students)
    }

    /// Name of the active backend, for health reporting.
    pub fn provider_name(&self) -> &'static str {
        if self.pool.is_some() { "postgres" } else { "memory" }
    }

    /// Check that the backend is reachable. Process-local stores always are.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
