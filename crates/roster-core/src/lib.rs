//! # roster-core
//!
//! Core crate for the student roster. Contains configuration schemas,
//! the generic repository trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other roster crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
