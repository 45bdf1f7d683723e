//! In-process student repository.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use roster_core::error::AppError;
use roster_core::result::AppResult;
use roster_core::traits::Repository;
use roster_entity::student::{CreateStudent, Student, StudentId};

use super::{EMAIL_TAKEN, StudentRepository};

/// Student repository holding records in process memory.
///
/// Ids come from a monotonic sequence starting at 1 and are never reused.
/// Email uniqueness is enforced on every write, mirroring the
/// `students_email_key` constraint of the PostgreSQL schema.
#[derive(Debug, Clone, Default)]
pub struct MemoryStudentRepository {
    state: Arc<RwLock<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: StudentId,
    rows: BTreeMap<StudentId, Student>,
}

impl MemoryState {
    fn email_owner(&self, email: &str) -> Option<StudentId> {
        self.rows
            .values()
            .find(|student| student.email == email)
            .map(|student| student.id)
    }
}

impl MemoryStudentRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }

    /// Returns `true` when no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.rows.is_empty()
    }
}

#[async_trait]
impl Repository<Student, StudentId> for MemoryStudentRepository {
    async fn find_all(&self) -> AppResult<Vec<Student>> {
        Ok(self.state.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: StudentId) -> AppResult<Option<Student>> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: StudentId) -> AppResult<bool> {
        Ok(self.state.read().await.rows.contains_key(&id))
    }

    async fn save(&self, student: &Student) -> AppResult<Student> {
        let mut state = self.state.write().await;

        if let Some(owner) = state.email_owner(&student.email) {
            if owner != student.id {
                return Err(AppError::conflict(EMAIL_TAKEN));
            }
        }

        state.last_id = state.last_id.max(student.id);
        state.rows.insert(student.id, student.clone());
        debug!(student_id = student.id, "Saved student in memory");

        Ok(student.clone())
    }

    async fn delete_by_id(&self, id: StudentId) -> AppResult<bool> {
        Ok(self.state.write().await.rows.remove(&id).is_some())
    }
}

#[async_trait]
impl StudentRepository for MemoryStudentRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        let state = self.state.read().await;
        Ok(state
            .email_owner(email)
            .and_then(|id| state.rows.get(&id).cloned()))
    }

    async fn create(&self, data: &CreateStudent) -> AppResult<Student> {
        let mut state = self.state.write().await;

        if state.email_owner(&data.email).is_some() {
            return Err(AppError::conflict(EMAIL_TAKEN));
        }

        state.last_id += 1;
        let student = data.clone().with_id(state.last_id);
        state.rows.insert(student.id, student.clone());
        debug!(student_id = student.id, "Created student in memory");

        Ok(student)
    }
}
