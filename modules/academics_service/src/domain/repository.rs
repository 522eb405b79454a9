//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs
//!
//! Uniqueness that the schema also enforces (course codes, one offering per
//! programme/course pair, one template per course) surfaces as dedicated
//! [`StoreError`] variants so the service can report the semantic conflict
//! instead of a generic backend failure. The check-and-insert pairs run
//! inside one transaction in the implementations; a concurrent second writer
//! hits the UNIQUE index and gets the same variant.

use crate::contract::{
    Course, CourseOutcome, Department, Faculty, GeneratedPaper, NewQuestion, NewTopic, Offering,
    PaperQuestion, Programme, Question, SectionSpec, SuperAdmin, Template, Topic,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Duplicate {field}: {value}")]
    Duplicate { field: &'static str, value: String },

    #[error("Programme {programme_id} already offers course {course_id}")]
    DuplicateOffering { programme_id: i32, course_id: i32 },

    #[error("Template already exists for course {course_id}")]
    DuplicateTemplate { course_id: i32 },

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Faculty row ready for insertion; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewFacultyRecord {
    pub name: String,
    pub email: String,
    pub password_digest: String,
    pub department_id: i32,
}

/// Template ready for insertion
#[derive(Debug, Clone)]
pub struct NewTemplateRecord {
    pub course_id: i32,
    pub duration_minutes: i32,
    pub total_marks: i32,
    pub sections: Vec<SectionSpec>,
}

/// Generated paper ready for insertion, question rows included
#[derive(Debug, Clone)]
pub struct NewPaperRecord {
    pub course_id: i32,
    pub template_id: i32,
    pub total_marks: i32,
    pub duration_minutes: i32,
    pub generated_by: Option<i32>,
    pub co_weightages: BTreeMap<String, i32>,
    pub questions: Vec<PaperQuestion>,
}

/// Repository for super admin accounts
#[async_trait]
pub trait SuperAdminRepository: Send + Sync {
    /// Insert a super admin with a pre-hashed password
    async fn insert(&self, email: &str, password_digest: &str) -> StoreResult<SuperAdmin>;

    /// Find a super admin by canonical email
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<SuperAdmin>>;

    /// Find a super admin by id
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<SuperAdmin>>;

    /// Fetch the stored password digest
    async fn digest_by_id(&self, id: i32) -> StoreResult<Option<String>>;
}

/// Repository for departments
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Insert a department; name is unique
    async fn insert(&self, name: &str) -> StoreResult<Department>;

    /// Find a department by id
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Department>>;

    /// List all departments ordered by name
    async fn list_all(&self) -> StoreResult<Vec<Department>>;

    /// Point the department's hod_id at a faculty (or clear it)
    async fn set_hod(&self, department_id: i32, faculty_id: Option<i32>) -> StoreResult<Department>;

    /// Delete a department with everything it owns, atomically
    async fn delete_cascade(&self, id: i32) -> StoreResult<()>;
}

/// Repository for faculty accounts
#[async_trait]
pub trait FacultyRepository: Send + Sync {
    /// Insert a faculty member; email is unique
    async fn insert(&self, record: &NewFacultyRecord) -> StoreResult<Faculty>;

    /// Find a faculty member by id
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Faculty>>;

    /// Find a faculty member by canonical email
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Faculty>>;

    /// Fetch the stored password digest
    async fn digest_by_id(&self, id: i32) -> StoreResult<Option<String>>;

    /// List a department's roster ordered by name
    async fn list_by_department(&self, department_id: i32) -> StoreResult<Vec<Faculty>>;

    /// Delete a faculty member, their offerings, and any HOD reference to
    /// them, atomically
    async fn delete(&self, id: i32) -> StoreResult<()>;
}

/// Repository for programmes
#[async_trait]
pub trait ProgrammeRepository: Send + Sync {
    /// Insert a programme under a department
    async fn insert(&self, name: &str, department_id: i32) -> StoreResult<Programme>;

    /// Find a programme by id
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Programme>>;

    /// List a department's programmes ordered by name
    async fn list_by_department(&self, department_id: i32) -> StoreResult<Vec<Programme>>;

    /// Delete a programme and its offerings, atomically
    async fn delete_cascade(&self, id: i32) -> StoreResult<()>;
}

/// Repository for the global course catalogue
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Insert a course; code is unique
    async fn insert(&self, code: &str, title: &str, home_department_id: i32)
        -> StoreResult<Course>;

    /// Find a course by id
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Course>>;

    /// List the whole catalogue ordered by code
    async fn list_all(&self) -> StoreResult<Vec<Course>>;

    /// List a department's home courses ordered by code
    async fn list_by_department(&self, department_id: i32) -> StoreResult<Vec<Course>>;

    /// List courses by id set
    async fn list_by_ids(&self, ids: &[i32]) -> StoreResult<Vec<Course>>;

    /// Delete a course with its outcomes, topics, questions, template,
    /// offerings and papers, atomically
    async fn delete_cascade(&self, id: i32) -> StoreResult<()>;
}

/// Repository for course outcomes and topics
#[async_trait]
pub trait SyllabusRepository: Send + Sync {
    /// Insert an outcome; code is unique within the course
    async fn insert_outcome(
        &self,
        course_id: i32,
        code: &str,
        description: &str,
    ) -> StoreResult<CourseOutcome>;

    /// Find an outcome by id
    async fn find_outcome(&self, id: i32) -> StoreResult<Option<CourseOutcome>>;

    /// List a course's outcomes ordered by code
    async fn list_outcomes(&self, course_id: i32) -> StoreResult<Vec<CourseOutcome>>;

    /// Insert a topic
    async fn insert_topic(&self, new_topic: &NewTopic) -> StoreResult<Topic>;

    /// Find a topic by id
    async fn find_topic(&self, id: i32) -> StoreResult<Option<Topic>>;

    /// List a course's topics
    async fn list_topics(&self, course_id: i32) -> StoreResult<Vec<Topic>>;

    /// Re-point a topic's parent link
    async fn set_topic_parent(
        &self,
        topic_id: i32,
        parent_topic_id: Option<i32>,
    ) -> StoreResult<Topic>;
}

/// Repository for the question bank
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Insert a question
    async fn insert(&self, new_question: &NewQuestion) -> StoreResult<Question>;

    /// Find a question by id
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Question>>;

    /// List a course's questions, optionally only active ones
    async fn list_by_course(&self, course_id: i32, active_only: bool)
        -> StoreResult<Vec<Question>>;

    /// Flip a question's active flag
    async fn set_active(&self, id: i32, active: bool) -> StoreResult<Question>;
}

/// Repository for programme course offerings
#[async_trait]
pub trait OfferingRepository: Send + Sync {
    /// Insert an offering; fails with [`StoreError::DuplicateOffering`] when
    /// the programme already offers the course. Check and insert run in one
    /// transaction.
    async fn insert_unique(
        &self,
        programme_id: i32,
        course_id: i32,
        semester_no: i32,
        faculty_id: i32,
    ) -> StoreResult<Offering>;

    /// List a programme's offerings ordered by semester
    async fn list_by_programme(&self, programme_id: i32) -> StoreResult<Vec<Offering>>;

    /// List offerings of a course across programmes
    async fn list_by_course(&self, course_id: i32) -> StoreResult<Vec<Offering>>;

    /// List a faculty member's teaching assignments
    async fn list_by_faculty(&self, faculty_id: i32) -> StoreResult<Vec<Offering>>;
}

/// Repository for exam templates
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Insert the course's single template; fails with
    /// [`StoreError::DuplicateTemplate`] when one already exists. Check and
    /// insert run in one transaction.
    async fn insert_unique(&self, record: &NewTemplateRecord) -> StoreResult<Template>;

    /// Fetch the template of a course
    async fn find_by_course(&self, course_id: i32) -> StoreResult<Option<Template>>;
}

/// Repository for generated papers
#[async_trait]
pub trait PaperRepository: Send + Sync {
    /// Insert a paper and its question rows in one transaction
    async fn insert(&self, record: &NewPaperRecord) -> StoreResult<GeneratedPaper>;

    /// List a course's papers, newest first
    async fn list_by_course(&self, course_id: i32) -> StoreResult<Vec<GeneratedPaper>>;
}

/// Bundle of every repository the service needs
#[derive(Clone)]
pub struct Stores {
    pub super_admins: Arc<dyn SuperAdminRepository>,
    pub departments: Arc<dyn DepartmentRepository>,
    pub faculty: Arc<dyn FacultyRepository>,
    pub programmes: Arc<dyn ProgrammeRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub syllabus: Arc<dyn SyllabusRepository>,
    pub questions: Arc<dyn QuestionRepository>,
    pub offerings: Arc<dyn OfferingRepository>,
    pub templates: Arc<dyn TemplateRepository>,
    pub papers: Arc<dyn PaperRepository>,
}
