#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// A required field was missing or blank.
    #[error("{0}")]
    Validation(String),

    /// The create-time uniqueness check found an existing row.
    #[error("{0} already exists")]
    Conflict(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    /// Anything the database rejected, including foreign key violations.
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

impl RepoError {
    /// Map a unique-constraint violation raised by an insert to a conflict.
    pub(crate) fn from_insert(err: sqlx::Error, entity: &'static str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => RepoError::Conflict(entity),
            _ => RepoError::Database(err),
        }
    }
}
