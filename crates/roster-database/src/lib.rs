//! # roster-database
//!
//! Storage backends for the student roster: the PostgreSQL connection pool,
//! the schema migration runner, and the student repository implementations.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use repositories::student::{
    MemoryStudentRepository, PgStudentRepository, StudentRepository,
};
pub use store::StoreHandle;
