use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::require_text;
use crate::error::RepoError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Degree {
    pub degree_id: i64,
    pub degree_desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeInput {
    #[serde(default)]
    pub degree_desc: String,
}

impl DegreeInput {
    pub fn new(degree_desc: impl Into<String>) -> Self {
        Self { degree_desc: degree_desc.into() }
    }

    pub fn validate(&self) -> Result<(), RepoError> {
        require_text("degree_desc", &self.degree_desc)
    }
}

impl From<&Degree> for DegreeInput {
    fn from(degree: &Degree) -> Self {
        Self { degree_desc: degree.degree_desc.clone() }
    }
}
