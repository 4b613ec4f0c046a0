use super::contains_pattern;
use crate::error::RepoError;
use crate::models::{Student, StudentInput, StudentWithDegree};
use sqlx::SqlitePool;

const SELECT_WITH_DEGREE: &str = "SELECT s.student_id, s.degree_id, s.student_fname, s.student_lname, d.degree_desc
     FROM students s
     JOIN degree d ON s.degree_id = d.degree_id";

pub struct StudentRepository {
    pool: SqlitePool,
}

impl StudentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<StudentWithDegree>, sqlx::Error> {
        let sql = format!("{} ORDER BY s.student_id", SELECT_WITH_DEGREE);
        sqlx::query_as::<_, StudentWithDegree>(&sql)
            .fetch_all(&self.pool)
            .await
    }

    /// Students whose first name, last name or id contains `term`.
    pub async fn search(&self, term: &str) -> Result<Vec<StudentWithDegree>, sqlx::Error> {
        if term.trim().is_empty() {
            return self.get_all().await;
        }
        let sql = format!(
            r"{}
             WHERE s.student_fname LIKE ?1 ESCAPE '\'
                OR s.student_lname LIKE ?1 ESCAPE '\'
                OR CAST(s.student_id AS TEXT) LIKE ?1 ESCAPE '\'
             ORDER BY s.student_id",
            SELECT_WITH_DEGREE
        );
        sqlx::query_as::<_, StudentWithDegree>(&sql)
            .bind(contains_pattern(term))
            .fetch_all(&self.pool)
            .await
    }

    /// Insert a student unless one with the same degree and name exists.
    /// An unknown degree is left to the foreign key to reject.
    pub async fn create(&self, input: &StudentInput) -> Result<Student, RepoError> {
        input.validate()?;

        let student = sqlx::query_as::<_, Student>(
            "INSERT INTO students (degree_id, student_fname, student_lname)
             SELECT ?1, ?2, ?3
             WHERE NOT EXISTS (
                 SELECT 1 FROM students
                 WHERE degree_id = ?1 AND student_fname = ?2 AND student_lname = ?3
             )
             RETURNING *",
        )
        .bind(input.degree_id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .fetch_optional(&self.pool)
        .await?;

        student.ok_or(RepoError::Conflict("Student"))
    }

    pub async fn update(&self, id: i64, input: &StudentInput) -> Result<Student, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE students
             SET degree_id = ?, student_fname = ?, student_lname = ?
             WHERE student_id = ?",
        )
        .bind(input.degree_id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(id)
        .execute(&self.pool)
        .await?;
        tracing::debug!("Updated student {} ({} rows)", id, result.rows_affected());

        Ok(input.clone().into_student(id))
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE student_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::degree::DegreeRepository;
    use crate::db::test_pool;
    use crate::models::DegreeInput;

    async fn setup() -> (StudentRepository, i64) {
        let pool = test_pool().await;
        let degree = DegreeRepository::new(pool.clone())
            .create(&DegreeInput::new("BSCS"))
            .await
            .unwrap();
        (StudentRepository::new(pool), degree.degree_id)
    }

    #[tokio::test]
    async fn test_create_and_list_with_degree() {
        let (repo, degree_id) = setup().await;

        let ada = repo.create(&StudentInput::new(degree_id, "Ada", "Lovelace")).await.unwrap();
        assert_eq!(ada.student_id, 1);
        assert_eq!(ada.degree_id, degree_id);

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].student, ada);
        assert_eq!(all[0].degree_desc, "BSCS");
    }

    #[tokio::test]
    async fn test_duplicate_create_conflicts() {
        let (repo, degree_id) = setup().await;

        repo.create(&StudentInput::new(degree_id, "Ada", "Lovelace")).await.unwrap();
        let err = repo.create(&StudentInput::new(degree_id, "Ada", "Lovelace")).await.unwrap_err();
        assert_eq!(err.to_string(), "Student already exists");

        // Same name under another surname is a different student
        repo.create(&StudentInput::new(degree_id, "Ada", "Byron")).await.unwrap();
        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_degree_rejected_by_schema() {
        let (repo, _) = setup().await;
        let err = repo.create(&StudentInput::new(77, "Ada", "Lovelace")).await.unwrap_err();
        assert!(matches!(err, RepoError::Database(_)));
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_does_not_check_duplicates() {
        let (repo, degree_id) = setup().await;
        repo.create(&StudentInput::new(degree_id, "Ada", "Lovelace")).await.unwrap();
        let alan = repo.create(&StudentInput::new(degree_id, "Alan", "Turing")).await.unwrap();

        let updated = repo
            .update(alan.student_id, &StudentInput::new(degree_id, "Ada", "Lovelace"))
            .await
            .unwrap();
        assert_eq!(updated.student_id, alan.student_id);

        let all = repo.get_all().await.unwrap();
        assert!(all.iter().all(|s| s.student.first_name == "Ada"));
    }

    #[tokio::test]
    async fn test_search_matches_names_and_id() {
        let (repo, degree_id) = setup().await;
        repo.create(&StudentInput::new(degree_id, "Allen", "Danao")).await.unwrap();
        repo.create(&StudentInput::new(degree_id, "Mike", "Cheq")).await.unwrap();

        let found = repo.search("dan").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].student.first_name, "Allen");
        assert_eq!(found[0].degree_desc, "BSCS");

        let found = repo.search("2").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].student.first_name, "Mike");

        assert_eq!(repo.search("  ").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete() {
        let (repo, degree_id) = setup().await;
        let ada = repo.create(&StudentInput::new(degree_id, "Ada", "Lovelace")).await.unwrap();
        assert_eq!(repo.delete(ada.student_id).await.unwrap(), 1);
        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
