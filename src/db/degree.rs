use super::contains_pattern;
use crate::error::RepoError;
use crate::models::{Degree, DegreeInput};
use sqlx::SqlitePool;

pub struct DegreeRepository {
    pool: SqlitePool,
}

impl DegreeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<Degree>, sqlx::Error> {
        sqlx::query_as::<_, Degree>("SELECT * FROM degree ORDER BY degree_id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Degree>, sqlx::Error> {
        sqlx::query_as::<_, Degree>("SELECT * FROM degree WHERE degree_id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Degrees whose description or id contains `term`. Case is ignored for
    /// ASCII letters only.
    pub async fn search(&self, term: &str) -> Result<Vec<Degree>, sqlx::Error> {
        if term.trim().is_empty() {
            return self.get_all().await;
        }
        sqlx::query_as::<_, Degree>(
            r"SELECT * FROM degree
             WHERE degree_desc LIKE ?1 ESCAPE '\' OR CAST(degree_id AS TEXT) LIKE ?1 ESCAPE '\'
             ORDER BY degree_id",
        )
        .bind(contains_pattern(term))
        .fetch_all(&self.pool)
        .await
    }

    /// Insert a degree unless one with the same description exists. The
    /// existence check and the insert are one statement, so concurrent
    /// creates are serialized by SQLite's write lock.
    pub async fn create(&self, input: &DegreeInput) -> Result<Degree, RepoError> {
        input.validate()?;

        let degree = sqlx::query_as::<_, Degree>(
            "INSERT INTO degree (degree_desc)
             SELECT ?1
             WHERE NOT EXISTS (SELECT 1 FROM degree WHERE degree_desc = ?1)
             RETURNING *",
        )
        .bind(&input.degree_desc)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::from_insert(e, "Degree"))?;

        degree.ok_or(RepoError::Conflict("Degree"))
    }

    /// Overwrite the description of `id`. Reports the input back even when no
    /// row matched, and does not re-check uniqueness.
    pub async fn update(&self, id: i64, input: &DegreeInput) -> Result<Degree, sqlx::Error> {
        let result = sqlx::query("UPDATE degree SET degree_desc = ? WHERE degree_id = ?")
            .bind(&input.degree_desc)
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!("Updated degree {} ({} rows)", id, result.rows_affected());

        Ok(Degree {
            degree_id: id,
            degree_desc: input.degree_desc.clone(),
        })
    }

    /// Delete a degree. Its students go with it.
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM degree WHERE degree_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
