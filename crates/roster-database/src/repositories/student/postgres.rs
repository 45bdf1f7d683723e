//! PostgreSQL student repository.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use roster_core::error::{AppError, ErrorKind};
use roster_core::result::AppResult;
use roster_core::traits::Repository;
use roster_entity::student::{CreateStudent, Student, StudentId};

use super::{EMAIL_TAKEN, EMAIL_UNIQUE_CONSTRAINT, StudentRepository};

/// Student repository backed by the `students` table.
#[derive(Debug, Clone)]
pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    /// Create a new student repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps a failed write, turning the email unique constraint into a conflict.
fn map_write_error(e: sqlx::Error, context: &'static str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) =>
        {
            AppError::conflict(EMAIL_TAKEN)
        }
        _ => AppError::with_source(ErrorKind::Database, context, e),
    }
}

#[async_trait]
impl Repository<Student, StudentId> for PgStudentRepository {
    async fn find_all(&self) -> AppResult<Vec<Student>> {
        sqlx::query_as::<_, Student>("SELECT id, name, email, dob FROM students ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list students", e))
    }

    async fn find_by_id(&self, id: StudentId) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>("SELECT id, name, email, dob FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find student by id", e)
            })
    }

    async fn exists_by_id(&self, id: StudentId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM students WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check student existence", e)
            })
    }

    async fn save(&self, student: &Student) -> AppResult<Student> {
        debug!(student_id = student.id, "Saving student");

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let updated = sqlx::query_as::<_, Student>(
            "UPDATE students SET name = $2, email = $3, dob = $4 WHERE id = $1 \
             RETURNING id, name, email, dob",
        )
        .bind(student.id)
        .bind(&student.name)
        .bind(&student.email)
        .bind(student.dob)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, "Failed to update student"))?;

        let saved = match updated {
            Some(saved) => saved,
            None => {
                debug!(student_id = student.id, "Inserting student with explicit id");

                let inserted = sqlx::query_as::<_, Student>(
                    "INSERT INTO students (id, name, email, dob) VALUES ($1, $2, $3, $4) \
                     RETURNING id, name, email, dob",
                )
                .bind(student.id)
                .bind(&student.name)
                .bind(&student.email)
                .bind(student.dob)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| map_write_error(e, "Failed to insert student"))?;

                // Keep generated ids ahead of explicitly inserted ones.
                sqlx::query(
                    "SELECT setval('students_id_seq', GREATEST($1, last_value)) \
                     FROM students_id_seq",
                )
                .bind(inserted.id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to advance id sequence", e)
                })?;

                inserted
            }
        };

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit student save", e)
        })?;

        Ok(saved)
    }

    async fn delete_by_id(&self, id: StudentId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete student", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>("SELECT id, name, email, dob FROM students WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find student by email", e)
            })
    }

    async fn create(&self, data: &CreateStudent) -> AppResult<Student> {
        sqlx::query_as::<_, Student>(
            "INSERT INTO students (name, email, dob) VALUES ($1, $2, $3) \
             RETURNING id, name, email, dob",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(data.dob)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create student"))
    }
}
