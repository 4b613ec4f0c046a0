use super::contains_pattern;
use crate::error::RepoError;
use crate::models::{Teacher, TeacherInput};
use sqlx::SqlitePool;

/// Teachers are never deleted; they are deactivated through `is_active`.
pub struct TeacherRepository {
    pool: SqlitePool,
}

impl TeacherRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<Teacher>, sqlx::Error> {
        sqlx::query_as::<_, Teacher>("SELECT * FROM teacher ORDER BY teacher_id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn search(&self, term: &str) -> Result<Vec<Teacher>, sqlx::Error> {
        if term.trim().is_empty() {
            return self.get_all().await;
        }
        sqlx::query_as::<_, Teacher>(
            r"SELECT * FROM teacher
             WHERE teacher_fname LIKE ?1 ESCAPE '\'
                OR teacher_lname LIKE ?1 ESCAPE '\'
                OR CAST(teacher_id AS TEXT) LIKE ?1 ESCAPE '\'
             ORDER BY teacher_id",
        )
        .bind(contains_pattern(term))
        .fetch_all(&self.pool)
        .await
    }

    /// New teachers always start active, whatever `is_active` says.
    pub async fn create(&self, input: &TeacherInput) -> Result<Teacher, RepoError> {
        input.validate()?;

        let teacher = sqlx::query_as::<_, Teacher>(
            "INSERT INTO teacher (teacher_fname, teacher_lname)
             SELECT ?1, ?2
             WHERE NOT EXISTS (SELECT 1 FROM teacher WHERE teacher_fname = ?1 AND teacher_lname = ?2)
             RETURNING *",
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .fetch_optional(&self.pool)
        .await?;

        teacher.ok_or(RepoError::Conflict("Teacher"))
    }

    /// Overwrite name and status. A missing `is_active` writes `true`, so an
    /// update that only carries the name reactivates the teacher.
    pub async fn update(&self, id: i64, input: &TeacherInput) -> Result<Teacher, sqlx::Error> {
        let is_active = input.is_active.unwrap_or(true);
        sqlx::query(
            "UPDATE teacher
             SET teacher_fname = ?, teacher_lname = ?, is_active = ?
             WHERE teacher_id = ?",
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(is_active)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Teacher {
            teacher_id: id,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            is_active,
        })
    }

    /// Flip the active flag in a single statement and return the new value.
    pub async fn toggle_status(&self, id: i64) -> Result<bool, RepoError> {
        let row: Option<(bool,)> = sqlx::query_as(
            "UPDATE teacher SET is_active = NOT is_active WHERE teacher_id = ? RETURNING is_active",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(is_active,)| is_active).ok_or(RepoError::NotFound("Teacher"))
    }
}
