use super::contains_pattern;
use crate::error::RepoError;
use crate::models::{Course, CourseInput};
use sqlx::SqlitePool;

pub struct CourseRepository {
    pool: SqlitePool,
}

impl CourseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<Course>, sqlx::Error> {
        sqlx::query_as::<_, Course>("SELECT * FROM course ORDER BY course_id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn search(&self, term: &str) -> Result<Vec<Course>, sqlx::Error> {
        if term.trim().is_empty() {
            return self.get_all().await;
        }
        sqlx::query_as::<_, Course>(
            r"SELECT * FROM course
             WHERE course_desc LIKE ?1 ESCAPE '\' OR CAST(course_id AS TEXT) LIKE ?1 ESCAPE '\'
             ORDER BY course_id",
        )
        .bind(contains_pattern(term))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create(&self, input: &CourseInput) -> Result<Course, RepoError> {
        input.validate()?;

        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO course (course_desc)
             SELECT ?1
             WHERE NOT EXISTS (SELECT 1 FROM course WHERE course_desc = ?1)
             RETURNING *",
        )
        .bind(&input.course_desc)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::from_insert(e, "Course"))?;

        course.ok_or(RepoError::Conflict("Course"))
    }

    pub async fn update(&self, id: i64, input: &CourseInput) -> Result<Course, sqlx::Error> {
        sqlx::query("UPDATE course SET course_desc = ? WHERE course_id = ?")
            .bind(&input.course_desc)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(Course {
            course_id: id,
            course_desc: input.course_desc.clone(),
        })
    }

    /// Delete a course along with its classes.
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM course WHERE course_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
