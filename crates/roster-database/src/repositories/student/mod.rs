//! Student repository: the persistence gateway for student records.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use roster_core::result::AppResult;
use roster_core::traits::Repository;
use roster_entity::student::{CreateStudent, Student, StudentId};

pub use memory::MemoryStudentRepository;
pub use postgres::PgStudentRepository;

/// Name of the unique constraint guarding student emails.
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "students_email_key";

/// Message carried by every email uniqueness conflict.
pub const EMAIL_TAKEN: &str = "email taken";

/// Storage operations for student records.
///
/// Extends the identity-keyed [`Repository`] with email lookup and
/// id-assigning insertion. Implementations must reject a write that would
/// give two records the same email with an `ErrorKind::Conflict` error.
#[async_trait]
pub trait StudentRepository: Repository<Student, StudentId> + std::fmt::Debug {
    /// Find a student by exact email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>>;

    /// Insert a new student and return it with its store-assigned id.
    async fn create(&self, data: &CreateStudent) -> AppResult<Student>;
}
