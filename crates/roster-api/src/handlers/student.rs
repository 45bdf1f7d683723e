//! Student record handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use roster_entity::student::{Student, StudentId};

use crate::dto::request::{CreateStudentRequest, UpdateStudentParams};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/v1/student
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = state.student_service.list_students().await?;
    Ok(Json(students))
}

/// GET /api/v1/student/{student_id}
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<Student>, ApiError> {
    let student = state.student_service.get_student(student_id).await?;
    Ok(Json(student))
}

/// POST /api/v1/student
pub async fn add_student(
    State(state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> Result<StatusCode, ApiError> {
    state.student_service.add_student(req.into()).await?;
    Ok(StatusCode::OK)
}

/// PUT /api/v1/student/{student_id}?name=&email=&dob=
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<StudentId>,
    Query(params): Query<UpdateStudentParams>,
) -> Result<StatusCode, ApiError> {
    state
        .student_service
        .update_student(student_id, params.into())
        .await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/v1/student/{student_id}
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<StudentId>,
) -> Result<StatusCode, ApiError> {
    state.student_service.delete_student(student_id).await?;
    Ok(StatusCode::OK)
}
