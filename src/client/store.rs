use super::api::{ApiClient, ClientError};
use crate::error::RepoError;
use crate::models::{
    ClassInput, ClassWithCourse, Course, CourseInput, Degree, DegreeInput, StudentInput, StudentWithDegree,
    Teacher, TeacherInput,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Describes one managed entity: where it lives on the API and how its rows
/// map onto the edit form.
pub trait Resource {
    /// Collection path below the API root.
    const PATH: &'static str;
    /// Collection holding the rows offered by the form's selector, if any.
    const LOOKUP_PATH: Option<&'static str> = None;

    type Row: DeserializeOwned + Clone + Debug;
    type Form: Serialize + Default + Clone + Debug;
    type Lookup: DeserializeOwned + Clone + Debug;

    fn row_id(row: &Self::Row) -> i64;
    fn to_form(row: &Self::Row) -> Self::Form;
    fn validate(form: &Self::Form) -> Result<(), RepoError>;
}

/// Resources whose rows can be hard-deleted.
pub trait Deletable: Resource {}

/// Lookup type for screens without a selector.
#[derive(Debug, Clone, Deserialize)]
pub enum NoLookup {}

pub struct Degrees;
pub struct Students;
pub struct Teachers;
pub struct Courses;
pub struct Classes;

impl Resource for Degrees {
    const PATH: &'static str = "degrees";
    type Row = Degree;
    type Form = DegreeInput;
    type Lookup = NoLookup;

    fn row_id(row: &Degree) -> i64 {
        row.degree_id
    }

    fn to_form(row: &Degree) -> DegreeInput {
        row.into()
    }

    fn validate(form: &DegreeInput) -> Result<(), RepoError> {
        form.validate()
    }
}

impl Resource for Students {
    const PATH: &'static str = "students";
    const LOOKUP_PATH: Option<&'static str> = Some(Degrees::PATH);
    type Row = StudentWithDegree;
    type Form = StudentInput;
    type Lookup = Degree;

    fn row_id(row: &StudentWithDegree) -> i64 {
        row.student.student_id
    }

    fn to_form(row: &StudentWithDegree) -> StudentInput {
        row.into()
    }

    fn validate(form: &StudentInput) -> Result<(), RepoError> {
        form.validate()
    }
}

impl Resource for Teachers {
    const PATH: &'static str = "teachers";
    type Row = Teacher;
    type Form = TeacherInput;
    type Lookup = NoLookup;

    fn row_id(row: &Teacher) -> i64 {
        row.teacher_id
    }

    fn to_form(row: &Teacher) -> TeacherInput {
        row.into()
    }

    fn validate(form: &TeacherInput) -> Result<(), RepoError> {
        form.validate()
    }
}

impl Resource for Courses {
    const PATH: &'static str = "courses";
    type Row = Course;
    type Form = CourseInput;
    type Lookup = NoLookup;

    fn row_id(row: &Course) -> i64 {
        row.course_id
    }

    fn to_form(row: &Course) -> CourseInput {
        row.into()
    }

    fn validate(form: &CourseInput) -> Result<(), RepoError> {
        form.validate()
    }
}

impl Resource for Classes {
    const PATH: &'static str = "classes";
    const LOOKUP_PATH: Option<&'static str> = Some(Courses::PATH);
    type Row = ClassWithCourse;
    type Form = ClassInput;
    type Lookup = Course;

    fn row_id(row: &ClassWithCourse) -> i64 {
        row.class.class_id
    }

    fn to_form(row: &ClassWithCourse) -> ClassInput {
        row.into()
    }

    fn validate(form: &ClassInput) -> Result<(), RepoError> {
        form.validate()
    }
}

impl Deletable for Degrees {}
impl Deletable for Students {}
impl Deletable for Courses {}
impl Deletable for Classes {}

/// Session state of one management screen.
///
/// The row list is never patched locally: every successful write is followed
/// by a full reload.
pub struct EntityStore<R: Resource> {
    api: ApiClient,
    rows: Vec<R::Row>,
    lookups: Vec<R::Lookup>,
    form: R::Form,
    editing: Option<i64>,
    search: String,
    error: Option<String>,
}

impl<R: Resource> EntityStore<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            rows: Vec::new(),
            lookups: Vec::new(),
            form: R::Form::default(),
            editing: None,
            search: String::new(),
            error: None,
        }
    }

    pub fn rows(&self) -> &[R::Row] {
        &self.rows
    }

    pub fn lookups(&self) -> &[R::Lookup] {
        &self.lookups
    }

    pub fn form(&self) -> &R::Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut R::Form {
        &mut self.form
    }

    /// `None` while creating, the row id while editing.
    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Load the rows and the selector options side by side.
    pub async fn mount(&mut self) {
        let (rows, lookups) = tokio::join!(self.api.list::<R::Row>(R::PATH), self.fetch_lookups());

        self.apply_rows(rows);
        match lookups {
            Ok(lookups) => self.lookups = lookups,
            Err(e) => {
                tracing::warn!("Failed to load {} options: {}", R::PATH, e);
                self.lookups.clear();
            }
        }
    }

    /// Refetch the unfiltered list.
    pub async fn reload(&mut self) {
        let rows = self.api.list::<R::Row>(R::PATH).await;
        self.apply_rows(rows);
    }

    /// Live search: a non-blank term asks the server, a blank one restores the
    /// full list.
    pub async fn search(&mut self, text: &str) {
        self.search = text.to_string();
        if text.trim().is_empty() {
            self.reload().await;
            return;
        }
        let rows = self.api.search::<R::Row>(R::PATH, text).await;
        self.apply_rows(rows);
    }

    /// Start editing `row`.
    pub fn edit(&mut self, row: &R::Row) {
        self.form = R::to_form(row);
        self.editing = Some(R::row_id(row));
        self.error = None;
    }

    /// Abandon the form, whether creating or editing.
    pub fn cancel(&mut self) {
        self.form = R::Form::default();
        self.editing = None;
        self.error = None;
    }

    /// Create or update from the form buffer. The form survives a failure so
    /// the user can correct it and retry.
    pub async fn submit(&mut self) -> Result<(), ClientError> {
        self.error = None;
        if let Err(e) = R::validate(&self.form) {
            return Err(self.fail(ClientError::Validation(e.to_string())));
        }

        let result = match self.editing {
            Some(id) => self.api.update::<_, serde_json::Value>(R::PATH, id, &self.form).await,
            None => self.api.create::<_, serde_json::Value>(R::PATH, &self.form).await,
        };
        if let Err(e) = result {
            return Err(self.fail(e));
        }

        self.form = R::Form::default();
        self.editing = None;
        self.reload().await;
        Ok(())
    }

    async fn fetch_lookups(&self) -> Result<Vec<R::Lookup>, ClientError> {
        match R::LOOKUP_PATH {
            Some(path) => self.api.list(path).await,
            None => Ok(Vec::new()),
        }
    }

    /// A failed load shows an empty list rather than stale rows.
    fn apply_rows(&mut self, rows: Result<Vec<R::Row>, ClientError>) {
        match rows {
            Ok(rows) => self.rows = rows,
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", R::PATH, e);
                self.rows.clear();
                self.error = Some(e.to_string());
            }
        }
    }

    fn fail(&mut self, err: ClientError) -> ClientError {
        self.error = Some(err.to_string());
        err
    }
}

impl<R: Deletable> EntityStore<R> {
    /// Delete after `confirm` approves the prompt. Returns `false` when the
    /// user backed out. A failed delete leaves the list as it was.
    pub async fn delete(&mut self, id: i64, confirm: impl FnOnce(&str) -> bool) -> Result<bool, ClientError> {
        if !confirm("Are you sure you want to delete this record?") {
            return Ok(false);
        }
        if let Err(e) = self.api.delete(R::PATH, id).await {
            return Err(self.fail(e));
        }
        self.reload().await;
        Ok(true)
    }
}

impl EntityStore<Teachers> {
    /// Deactivate or reactivate a teacher, then refetch.
    pub async fn toggle_status(&mut self, id: i64) -> Result<bool, ClientError> {
        let update = match self.api.toggle_teacher_status(id).await {
            Ok(update) => update,
            Err(e) => return Err(self.fail(e)),
        };
        self.reload().await;
        Ok(update.is_active)
    }
}
