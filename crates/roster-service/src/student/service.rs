//! Student service: listing, creation, partial update, and deletion.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use roster_core::config::StudentPolicyConfig;
use roster_core::error::AppError;
use roster_core::result::AppResult;
use roster_database::repositories::student::{EMAIL_TAKEN, StudentRepository};
use roster_entity::student::{CreateStudent, Student, StudentId, UpdateStudent};

/// Orchestrates student record operations over a [`StudentRepository`].
///
/// Add, update, and delete hold `write_lock` for their whole
/// check-then-write sequence, so two requests in this process can never
/// both pass the email uniqueness check for the same address. The store's
/// own unique constraint covers writers in other processes.
#[derive(Debug)]
pub struct StudentService {
    /// Student repository.
    repo: Arc<dyn StudentRepository>,
    /// Date-of-birth bounds for updates.
    policy: StudentPolicyConfig,
    /// Serializes check-then-write sequences.
    write_lock: Mutex<()>,
}

impl StudentService {
    /// Creates a new student service.
    pub fn new(repo: Arc<dyn StudentRepository>, policy: StudentPolicyConfig) -> Self {
        Self {
            repo,
            policy,
            write_lock: Mutex::new(()),
        }
    }

    /// Lists every stored student.
    pub async fn list_students(&self) -> AppResult<Vec<Student>> {
        self.repo.find_all().await
    }

    /// Gets a single student by id.
    pub async fn get_student(&self, id: StudentId) -> AppResult<Student> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| missing_student(id))
    }

    /// Adds a new student.
    ///
    /// Fails with a conflict when another student already uses the email.
    /// Name and date of birth are stored as given.
    pub async fn add_student(&self, candidate: CreateStudent) -> AppResult<Student> {
        let _guard = self.write_lock.lock().await;

        if self.repo.find_by_email(&candidate.email).await?.is_some() {
            return Err(AppError::conflict(EMAIL_TAKEN));
        }

        let student = self.repo.create(&candidate).await?;
        info!(student_id = student.id, email = %student.email, "Student added");

        Ok(student)
    }

    /// Deletes a student by id.
    pub async fn delete_student(&self, id: StudentId) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        if !self.repo.exists_by_id(id).await? {
            return Err(missing_student(id));
        }

        self.repo.delete_by_id(id).await?;
        info!(student_id = id, "Student deleted");

        Ok(())
    }

    /// Applies a partial update and saves the record once.
    ///
    /// Each field is applied only when present, valid, and different from
    /// the stored value:
    /// - `name` must be non-empty.
    /// - `email` must be non-empty and not owned by another student,
    ///   otherwise the whole update fails with a conflict.
    /// - `dob` must fall inside the configured bounds; out-of-range dates
    ///   are ignored.
    ///
    /// The record is saved even when no field changed.
    pub async fn update_student(
        &self,
        id: StudentId,
        changes: UpdateStudent,
    ) -> AppResult<Student> {
        let _guard = self.write_lock.lock().await;

        let mut student = self.get_student(id).await?;

        if let Some(name) = changes.name {
            if !name.is_empty() && name != student.name {
                student.name = name;
            }
        }

        if let Some(email) = changes.email {
            if !email.is_empty() && email != student.email {
                if let Some(owner) = self.repo.find_by_email(&email).await? {
                    if owner.id != student.id {
                        return Err(AppError::conflict(EMAIL_TAKEN));
                    }
                }
                student.email = email;
            }
        }

        if let Some(dob) = changes.dob {
            if !self.policy.accepts_dob(dob) {
                debug!(
                    student_id = id,
                    %dob,
                    earliest = %self.policy.dob_earliest,
                    latest = %self.policy.dob_latest,
                    "Ignoring out-of-range date of birth"
                );
            } else if dob != student.dob {
                student.dob = dob;
            }
        }

        let saved = self.repo.save(&student).await?;
        info!(student_id = id, "Student updated");

        Ok(saved)
    }
}

fn missing_student(id: StudentId) -> AppError {
    AppError::not_found(format!("Student with {id} does not exist"))
}
