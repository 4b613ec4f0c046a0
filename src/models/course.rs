use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::require_text;
use crate::error::RepoError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub course_id: i64,
    pub course_desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseInput {
    #[serde(default)]
    pub course_desc: String,
}

impl CourseInput {
    pub fn new(course_desc: impl Into<String>) -> Self {
        Self { course_desc: course_desc.into() }
    }

    pub fn validate(&self) -> Result<(), RepoError> {
        require_text("course_desc", &self.course_desc)
    }
}

impl From<&Course> for CourseInput {
    fn from(course: &Course) -> Self {
        Self { course_desc: course.course_desc.clone() }
    }
}
