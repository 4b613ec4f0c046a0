use super::{deleted, ApiResult, SearchQuery};
use crate::db::student::StudentRepository;
use crate::models::{Student, StudentInput, StudentWithDegree};
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

pub async fn list_students(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<StudentWithDegree>>> {
    let repo = StudentRepository::new(state.db_pool.clone());
    Ok(Json(repo.get_all().await?))
}

pub async fn search_students(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<Vec<StudentWithDegree>>> {
    let repo = StudentRepository::new(state.db_pool.clone());
    Ok(Json(repo.search(&params.query).await?))
}

pub async fn create_student(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Student>)> {
    let Json(input) = payload?;
    input.validate()?;

    let repo = StudentRepository::new(state.db_pool.clone());
    let student = repo.create(&input).await?;
    tracing::info!(
        "Created student {} ({} {}) in degree {}",
        student.student_id,
        student.first_name,
        student.last_name,
        student.degree_id
    );
    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn update_student(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> ApiResult<Json<Student>> {
    let Path(id) = path?;
    let Json(input) = payload?;
    input.validate()?;

    let repo = StudentRepository::new(state.db_pool.clone());
    Ok(Json(repo.update(id, &input).await?))
}

pub async fn delete_student(State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Value>> {
    let Path(id) = path?;
    let repo = StudentRepository::new(state.db_pool.clone());
    repo.delete(id).await?;
    Ok(deleted("Student"))
}
