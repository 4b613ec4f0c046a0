use crate::db::{
    class::ClassRepository, course::CourseRepository, degree::DegreeRepository,
    student::StudentRepository, teacher::TeacherRepository,
};
use crate::models::{ClassInput, CourseInput, DegreeInput, StudentInput, TeacherInput};
use anyhow::{Context, Result};
use sqlx::SqlitePool;

const DEGREES: &[&str] = &["BSIT", "BSCS", "BSIS"];
const STUDENTS: &[(&str, &str)] = &[("Allen", "Danao"), ("Mike", "Cheq"), ("Nakuhra", "Tan"), ("Jolly", "Bee")];
const TEACHERS: &[(&str, &str)] = &[("John", "Doe"), ("Jean", "Barquin")];
const COURSES: &[(&str, &str)] = &[("Programming 1", "Prog1 - IT1"), ("IT Fundamentals", "Fund1 - IT1")];

/// Load the sample records into an empty database. Does nothing once any
/// degree exists.
pub async fn load_sample_data(pool: &SqlitePool) -> Result<()> {
    let degree_repo = DegreeRepository::new(pool.clone());
    let student_repo = StudentRepository::new(pool.clone());
    let teacher_repo = TeacherRepository::new(pool.clone());
    let course_repo = CourseRepository::new(pool.clone());
    let class_repo = ClassRepository::new(pool.clone());

    if !degree_repo.get_all().await?.is_empty() {
        tracing::info!("Database already has records, skipping sample data");
        return Ok(());
    }

    let mut degree_ids = Vec::with_capacity(DEGREES.len());
    for desc in DEGREES {
        let degree = degree_repo
            .create(&DegreeInput::new(*desc))
            .await
            .with_context(|| format!("Failed to seed degree {}", desc))?;
        degree_ids.push(degree.degree_id);
    }

    // All sample students are enrolled in the first degree
    for (first, last) in STUDENTS {
        student_repo
            .create(&StudentInput::new(degree_ids[0], *first, *last))
            .await
            .with_context(|| format!("Failed to seed student {} {}", first, last))?;
    }

    for (first, last) in TEACHERS {
        teacher_repo
            .create(&TeacherInput::new(*first, *last))
            .await
            .with_context(|| format!("Failed to seed teacher {} {}", first, last))?;
    }

    for (course_desc, class_desc) in COURSES {
        let course = course_repo
            .create(&CourseInput::new(*course_desc))
            .await
            .with_context(|| format!("Failed to seed course {}", course_desc))?;
        class_repo
            .create(&ClassInput::new(course.course_id, *class_desc))
            .await
            .with_context(|| format!("Failed to seed class {}", class_desc))?;
    }

    tracing::info!(
        "Loaded sample data: {} degrees, {} students, {} teachers, {} courses, {} classes",
        DEGREES.len(),
        STUDENTS.len(),
        TEACHERS.len(),
        COURSES.len(),
        COURSES.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn test_sample_data_loads_once() {
        let pool = test_pool().await;
        load_sample_data(&pool).await.unwrap();
        load_sample_data(&pool).await.unwrap();

        let students = StudentRepository::new(pool.clone()).get_all().await.unwrap();
        assert_eq!(students.len(), 4);
        assert!(students.iter().all(|s| s.degree_desc == "BSIT"));

        let classes = ClassRepository::new(pool.clone()).get_all().await.unwrap();
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[1].course_desc, "IT Fundamentals");

        assert_eq!(TeacherRepository::new(pool).get_all().await.unwrap().len(), 2);
    }
}
