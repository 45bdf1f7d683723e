//! Repository implementations for roster entities.

pub mod student;

pub use student::{MemoryStudentRepository, PgStudentRepository, StudentRepository};
