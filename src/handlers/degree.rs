use super::{deleted, ApiResult, SearchQuery};
use crate::db::degree::DegreeRepository;
use crate::error::RepoError;
use crate::models::{Degree, DegreeInput};
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

pub async fn list_degrees(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Degree>>> {
    let repo = DegreeRepository::new(state.db_pool.clone());
    Ok(Json(repo.get_all().await?))
}

pub async fn search_degrees(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<Vec<Degree>>> {
    let repo = DegreeRepository::new(state.db_pool.clone());
    Ok(Json(repo.search(&params.query).await?))
}

pub async fn get_degree(State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Degree>> {
    let Path(id) = path?;
    let repo = DegreeRepository::new(state.db_pool.clone());
    let degree = repo.get_by_id(id).await?.ok_or(RepoError::NotFound("Degree"))?;
    Ok(Json(degree))
}

pub async fn create_degree(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DegreeInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Degree>)> {
    let Json(input) = payload?;
    input.validate()?;

    let repo = DegreeRepository::new(state.db_pool.clone());
    let degree = repo.create(&input).await?;
    tracing::info!("Created degree {} ({})", degree.degree_id, degree.degree_desc);
    Ok((StatusCode::CREATED, Json(degree)))
}

pub async fn update_degree(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<DegreeInput>, JsonRejection>,
) -> ApiResult<Json<Degree>> {
    let Path(id) = path?;
    let Json(input) = payload?;
    input.validate()?;

    let repo = DegreeRepository::new(state.db_pool.clone());
    Ok(Json(repo.update(id, &input).await?))
}

pub async fn delete_degree(State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Value>> {
    let Path(id) = path?;
    let repo = DegreeRepository::new(state.db_pool.clone());
    let removed = repo.delete(id).await?;
    tracing::info!("Deleted degree {} ({} rows)", id, removed);
    Ok(deleted("Degree"))
}
