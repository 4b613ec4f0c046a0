pub mod degree;
pub mod student;
pub mod teacher;
pub mod course;
pub mod class;
pub mod flag;
mod reference;

pub use degree::{Degree, DegreeInput};
pub use student::{Student, StudentInput, StudentWithDegree};
pub use teacher::{Teacher, TeacherInput};
pub use course::{Course, CourseInput};
pub use class::{Class, ClassInput, ClassWithCourse};

use crate::error::RepoError;

/// Reject a missing or whitespace-only text field.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), RepoError> {
    if value.trim().is_empty() {
        return Err(RepoError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Reject an unset reference. Generated ids start at 1, so 0 means "not selected".
pub(crate) fn require_reference(field: &str, value: i64) -> Result<(), RepoError> {
    if value <= 0 {
        return Err(RepoError::Validation(format!("{} is required", field)));
    }
    Ok(())
}
