use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{flag, require_text};
use crate::error::RepoError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Teacher {
    pub teacher_id: i64,
    #[serde(rename = "teacher_Fname")]
    #[sqlx(rename = "teacher_fname")]
    pub first_name: String,
    #[serde(rename = "teacher_Lname")]
    #[sqlx(rename = "teacher_lname")]
    pub last_name: String,
    #[serde(with = "flag")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherInput {
    #[serde(rename = "teacher_Fname", default)]
    pub first_name: String,
    #[serde(rename = "teacher_Lname", default)]
    pub last_name: String,
    /// Only honoured by update. Leaving it out on update marks the teacher active.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "flag::optional"
    )]
    pub is_active: Option<bool>,
}

impl TeacherInput {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            is_active: None,
        }
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn validate(&self) -> Result<(), RepoError> {
        require_text("teacher_Fname", &self.first_name)?;
        require_text("teacher_Lname", &self.last_name)
    }
}

impl From<&Teacher> for TeacherInput {
    fn from(teacher: &Teacher) -> Self {
        Self {
            first_name: teacher.first_name.clone(),
            last_name: teacher.last_name.clone(),
            is_active: Some(teacher.is_active),
        }
    }
}
