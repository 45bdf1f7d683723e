//! Core traits defined in `roster-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
