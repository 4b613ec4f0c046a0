mod degree;
mod student;
mod teacher;
mod course;
mod class;

use crate::error::RepoError;
use crate::AppState;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Every `/api` resource route.
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/degrees", get(degree::list_degrees).post(degree::create_degree))
        .route("/degrees/search", get(degree::search_degrees))
        .route(
            "/degrees/:id",
            get(degree::get_degree).put(degree::update_degree).delete(degree::delete_degree),
        )
        .route("/students", get(student::list_students).post(student::create_student))
        .route("/students/search", get(student::search_students))
        .route("/students/:id", put(student::update_student).delete(student::delete_student))
        .route("/teachers", get(teacher::list_teachers).post(teacher::create_teacher))
        .route("/teachers/search", get(teacher::search_teachers))
        .route("/teachers/:id", put(teacher::update_teacher))
        .route("/teachers/:id/toggle", patch(teacher::toggle_teacher_status))
        .route("/courses", get(course::list_courses).post(course::create_course))
        .route("/courses/search", get(course::search_courses))
        .route("/courses/:id", put(course::update_course).delete(course::delete_course))
        .route("/classes", get(class::list_classes).post(class::create_class))
        .route("/classes/search", get(class::search_classes))
        .route("/classes/:id", put(class::update_class).delete(class::delete_class))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "Server is running" }))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

/// Error leaving a handler, rendered as `{"message": ...}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        let status = match &err {
            RepoError::Validation(_) | RepoError::Conflict(_) => StatusCode::BAD_REQUEST,
            RepoError::NotFound(_) => StatusCode::NOT_FOUND,
            RepoError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("Request failed: {}", self.message);
        } else {
            tracing::warn!("Request rejected ({}): {}", self.status, self.message);
        }
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

fn deleted(entity: &str) -> Json<Value> {
    Json(json!({ "message": format!("{} deleted successfully", entity) }))
}
