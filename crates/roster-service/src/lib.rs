//! # roster-service
//!
//! Business logic service layer for the student roster. Services own the
//! decision logic (validation, uniqueness checks, partial updates) and
//! reach storage only through repository traits.
//!
//! Services follow constructor injection: every dependency is provided
//! at construction time via `Arc` references.

pub mod student;

pub use student::StudentService;
