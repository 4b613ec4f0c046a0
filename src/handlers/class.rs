use super::{deleted, ApiResult, SearchQuery};
use crate::db::class::ClassRepository;
use crate::models::{Class, ClassInput, ClassWithCourse};
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

pub async fn list_classes(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<ClassWithCourse>>> {
    let repo = ClassRepository::new(state.db_pool.clone());
    Ok(Json(repo.get_all().await?))
}

pub async fn search_classes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<Vec<ClassWithCourse>>> {
    let repo = ClassRepository::new(state.db_pool.clone());
    Ok(Json(repo.search(&params.query).await?))
}

pub async fn create_class(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ClassInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Class>)> {
    let Json(input) = payload?;
    input.validate()?;

    let repo = ClassRepository::new(state.db_pool.clone());
    let class = repo.create(&input).await?;
    tracing::info!("Created class {} ({}) for course {}", class.class_id, class.class_desc, class.course_id);
    Ok((StatusCode::CREATED, Json(class)))
}

pub async fn update_class(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ClassInput>, JsonRejection>,
) -> ApiResult<Json<Class>> {
    let Path(id) = path?;
    let Json(input) = payload?;
    input.validate()?;

    let repo = ClassRepository::new(state.db_pool.clone());
    Ok(Json(repo.update(id, &input).await?))
}

pub async fn delete_class(State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Value>> {
    let Path(id) = path?;
    let repo = ClassRepository::new(state.db_pool.clone());
    repo.delete(id).await?;
    Ok(deleted("Class"))
}
