//! # roster-entity
//!
//! Domain entity models for the student roster. Every struct in this crate
//! represents a database table row or the input used to write one. Stored
//! entities additionally derive `sqlx::FromRow`.

pub mod student;
