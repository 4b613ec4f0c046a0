use super::{ApiResult, SearchQuery};
use crate::db::teacher::TeacherRepository;
use crate::models::{Teacher, TeacherInput};
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn list_teachers(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Teacher>>> {
    let repo = TeacherRepository::new(state.db_pool.clone());
    Ok(Json(repo.get_all().await?))
}

pub async fn search_teachers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<Vec<Teacher>>> {
    let repo = TeacherRepository::new(state.db_pool.clone());
    Ok(Json(repo.search(&params.query).await?))
}

pub async fn create_teacher(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TeacherInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Teacher>)> {
    let Json(input) = payload?;
    input.validate()?;

    let repo = TeacherRepository::new(state.db_pool.clone());
    let teacher = repo.create(&input).await?;
    tracing::info!(
        "Created teacher {} ({} {})",
        teacher.teacher_id,
        teacher.first_name,
        teacher.last_name
    );
    Ok((StatusCode::CREATED, Json(teacher)))
}

pub async fn update_teacher(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<TeacherInput>, JsonRejection>,
) -> ApiResult<Json<Teacher>> {
    let Path(id) = path?;
    let Json(input) = payload?;
    input.validate()?;

    let repo = TeacherRepository::new(state.db_pool.clone());
    Ok(Json(repo.update(id, &input).await?))
}

pub async fn toggle_teacher_status(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Value>> {
    let Path(id) = path?;
    let repo = TeacherRepository::new(state.db_pool.clone());
    let is_active = repo.toggle_status(id).await?;
    tracing::info!("Teacher {} is now {}", id, if is_active { "active" } else { "inactive" });
    Ok(Json(json!({ "message": "Status updated", "is_active": u8::from(is_active) })))
}
