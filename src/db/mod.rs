pub mod degree;
pub mod student;
pub mod teacher;
pub mod course;
pub mod class;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // Every connection to an in-memory database gets its own empty database,
    // so keep exactly one connection alive for the lifetime of the pool.
    if database_url.contains(":memory:") {
        return SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await;
    }

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
}

/// Build a `LIKE` pattern matching `term` anywhere, with wildcards in the
/// term taken literally. Pair with `ESCAPE '\'`.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::degree::DegreeRepository;
    use super::student::StudentRepository;
    use super::teacher::TeacherRepository;
    use super::*;
    use crate::error::RepoError;
    use crate::models::{DegreeInput, StudentInput, TeacherInput};

    #[test]
    fn test_contains_pattern() {
        assert_eq!(contains_pattern("BS"), "%BS%");
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[tokio::test]
    async fn test_foreign_keys_enforced() {
        let pool = test_pool().await;
        let result = sqlx::query(
            "INSERT INTO students (degree_id, student_fname, student_lname) VALUES (99, 'Ada', 'Lovelace')",
        )
        .execute(&pool)
        .await;
        assert!(result.is_err());
    }

    /// A file-backed pool, so several connections write at once.
    async fn shared_pool(dir: &tempfile::TempDir) -> SqlitePool {
        let url = format!("sqlite://{}", dir.path().join("records.db").display());
        let pool = create_pool(&url).await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_distinct_creates_all_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let pool = shared_pool(&dir).await;
        let degree = DegreeRepository::new(pool.clone())
            .create(&DegreeInput::new("BSCS"))
            .await
            .unwrap();

        let tasks: Vec<_> = (0..40)
            .map(|i| {
                let repo = StudentRepository::new(pool.clone());
                let input = StudentInput::new(degree.degree_id, format!("Student{}", i), "Lovelace");
                tokio::spawn(async move { repo.create(&input).await })
            })
            .collect();

        for task in tasks {
            task.await.unwrap().unwrap();
        }
        assert_eq!(StudentRepository::new(pool).get_all().await.unwrap().len(), 40);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_duplicate_creates_keep_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let pool = shared_pool(&dir).await;

        let tasks: Vec<_> = (0..20)
            .map(|_| {
                let repo = DegreeRepository::new(pool.clone());
                tokio::spawn(async move { repo.create(&DegreeInput::new("BSCS")).await })
            })
            .collect();

        let mut created = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(_) => created += 1,
                Err(err) => assert!(matches!(err, RepoError::Conflict("Degree")), "{}", err),
            }
        }
        assert_eq!(created, 1);
        assert_eq!(DegreeRepository::new(pool.clone()).get_all().await.unwrap().len(), 1);

        // Composite-key entities are serialized the same way
        let tasks: Vec<_> = (0..20)
            .map(|_| {
                let repo = TeacherRepository::new(pool.clone());
                tokio::spawn(async move { repo.create(&TeacherInput::new("John", "Doe")).await })
            })
            .collect();
        let mut created = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                created += 1;
            }
        }
        assert_eq!(created, 1);
        assert_eq!(TeacherRepository::new(pool).get_all().await.unwrap().len(), 1);
    }
}
