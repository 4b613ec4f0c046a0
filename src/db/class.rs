use super::contains_pattern;
use crate::error::RepoError;
use crate::models::{Class, ClassInput, ClassWithCourse};
use sqlx::SqlitePool;

const SELECT_WITH_COURSE: &str = "SELECT c.class_id, c.course_id, c.class_desc, co.course_desc
     FROM class c
     JOIN course co ON c.course_id = co.course_id";

pub struct ClassRepository {
    pool: SqlitePool,
}

impl ClassRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<ClassWithCourse>, sqlx::Error> {
        let sql = format!("{} ORDER BY c.class_id", SELECT_WITH_COURSE);
        sqlx::query_as::<_, ClassWithCourse>(&sql)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn search(&self, term: &str) -> Result<Vec<ClassWithCourse>, sqlx::Error> {
        if term.trim().is_empty() {
            return self.get_all().await;
        }
        let sql = format!(
            r"{}
             WHERE c.class_desc LIKE ?1 ESCAPE '\' OR CAST(c.class_id AS TEXT) LIKE ?1 ESCAPE '\'
             ORDER BY c.class_id",
            SELECT_WITH_COURSE
        );
        sqlx::query_as::<_, ClassWithCourse>(&sql)
            .bind(contains_pattern(term))
            .fetch_all(&self.pool)
            .await
    }

    pub async fn create(&self, input: &ClassInput) -> Result<Class, RepoError> {
        input.validate()?;

        let class = sqlx::query_as::<_, Class>(
            "INSERT INTO class (course_id, class_desc)
             SELECT ?1, ?2
             WHERE NOT EXISTS (SELECT 1 FROM class WHERE course_id = ?1 AND class_desc = ?2)
             RETURNING *",
        )
        .bind(input.course_id)
        .bind(&input.class_desc)
        .fetch_optional(&self.pool)
        .await?;

        class.ok_or(RepoError::Conflict("Class"))
    }

    pub async fn update(&self, id: i64, input: &ClassInput) -> Result<Class, sqlx::Error> {
        sqlx::query("UPDATE class SET course_id = ?, class_desc = ? WHERE class_id = ?")
            .bind(input.course_id)
            .bind(&input.class_desc)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(input.clone().into_class(id))
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM class WHERE class_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
