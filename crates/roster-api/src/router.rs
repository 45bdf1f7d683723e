//! Route definitions for the roster HTTP API.
//!
//! Student routes are mounted under `/api/v1`, the health check under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{Router, middleware as axum_middleware, routing::get};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the request logging middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .nest("/v1", student_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Student CRUD
fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/student",
            get(handlers::student::list_students).post(handlers::student::add_student),
        )
        .route(
            "/student/{student_id}",
            get(handlers::student::get_student)
                .put(handlers::student::update_student)
                .delete(handlers::student::delete_student),
        )
}

/// Liveness and storage status
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
