use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{reference, require_reference, require_text};
use crate::error::RepoError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub student_id: i64,
    pub degree_id: i64,
    #[serde(rename = "student_FName")]
    #[sqlx(rename = "student_fname")]
    pub first_name: String,
    #[serde(rename = "student_LName")]
    #[sqlx(rename = "student_lname")]
    pub last_name: String,
}

/// A student row joined with its degree's description, as listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StudentWithDegree {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub student: Student,
    pub degree_desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInput {
    #[serde(default, deserialize_with = "reference::deserialize")]
    pub degree_id: i64,
    #[serde(rename = "student_FName", default)]
    pub first_name: String,
    #[serde(rename = "student_LName", default)]
    pub last_name: String,
}

impl StudentInput {
    pub fn new(degree_id: i64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            degree_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), RepoError> {
        require_reference("degree_id", self.degree_id)?;
        require_text("student_FName", &self.first_name)?;
        require_text("student_LName", &self.last_name)
    }

    pub fn into_student(self, student_id: i64) -> Student {
        Student {
            student_id,
            degree_id: self.degree_id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

impl From<&StudentWithDegree> for StudentInput {
    fn from(row: &StudentWithDegree) -> Self {
        Self {
            degree_id: row.student.degree_id,
            first_name: row.student.first_name.clone(),
            last_name: row.student.last_name.clone(),
        }
    }
}
