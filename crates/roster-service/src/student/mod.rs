//! Student record management.

pub mod service;

pub use service::StudentService;
