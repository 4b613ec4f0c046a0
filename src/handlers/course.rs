use super::{deleted, ApiResult, SearchQuery};
use crate::db::course::CourseRepository;
use crate::models::{Course, CourseInput};
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

pub async fn list_courses(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Course>>> {
    let repo = CourseRepository::new(state.db_pool.clone());
    Ok(Json(repo.get_all().await?))
}

pub async fn search_courses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<Vec<Course>>> {
    let repo = CourseRepository::new(state.db_pool.clone());
    Ok(Json(repo.search(&params.query).await?))
}

pub async fn create_course(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CourseInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Course>)> {
    let Json(input) = payload?;
    input.validate()?;

    let repo = CourseRepository::new(state.db_pool.clone());
    let course = repo.create(&input).await?;
    tracing::info!("Created course {} ({})", course.course_id, course.course_desc);
    Ok((StatusCode::CREATED, Json(course)))
}

pub async fn update_course(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CourseInput>, JsonRejection>,
) -> ApiResult<Json<Course>> {
    let Path(id) = path?;
    let Json(input) = payload?;
    input.validate()?;

    let repo = CourseRepository::new(state.db_pool.clone());
    Ok(Json(repo.update(id, &input).await?))
}

pub async fn delete_course(State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Value>> {
    let Path(id) = path?;
    let repo = CourseRepository::new(state.db_pool.clone());
    let removed = repo.delete(id).await?;
    tracing::info!("Deleted course {} ({} rows)", id, removed);
    Ok(deleted("Course"))
}
