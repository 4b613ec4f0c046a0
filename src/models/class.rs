use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{reference, require_reference, require_text};
use crate::error::RepoError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Class {
    pub class_id: i64,
    pub course_id: i64,
    pub class_desc: String,
}

/// A class row joined with its course's description, as listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ClassWithCourse {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub class: Class,
    pub course_desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInput {
    #[serde(default, deserialize_with = "reference::deserialize")]
    pub course_id: i64,
    #[serde(default)]
    pub class_desc: String,
}

impl ClassInput {
    pub fn new(course_id: i64, class_desc: impl Into<String>) -> Self {
        Self {
            course_id,
            class_desc: class_desc.into(),
        }
    }

    pub fn validate(&self) -> Result<(), RepoError> {
        require_reference("course_id", self.course_id)?;
        require_text("class_desc", &self.class_desc)
    }

    pub fn into_class(self, class_id: i64) -> Class {
        Class {
            class_id,
            course_id: self.course_id,
            class_desc: self.class_desc,
        }
    }
}

impl From<&ClassWithCourse> for ClassInput {
    fn from(row: &ClassWithCourse) -> Self {
        Self {
            course_id: row.class.course_id,
            class_desc: row.class.class_desc.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_id_accepts_integer_or_string() {
        let from_int: ClassInput = serde_json::from_str(r#"{"course_id": 3, "class_desc": "Prog1 - IT1"}"#).unwrap();
        let from_text: ClassInput = serde_json::from_str(r#"{"course_id": " 3", "class_desc": "Prog1 - IT1"}"#).unwrap();
        assert_eq!(from_int, from_text);
        assert_eq!(from_text.course_id, 3);

        let missing: ClassInput = serde_json::from_str(r#"{"class_desc": "Prog1 - IT1"}"#).unwrap();
        assert_eq!(missing.validate().unwrap_err().to_string(), "course_id is required");
    }
}
