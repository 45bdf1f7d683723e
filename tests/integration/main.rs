//! HTTP integration tests for the roster API.

mod health_test;
mod helpers;
mod student_test;
