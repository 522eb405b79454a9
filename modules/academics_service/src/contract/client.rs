//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with the
//! academics service. NO HTTP - direct function calls for performance.

use super::{
    error::AcademicsError,
    model::{
        Actor, Course, CourseOutcome, Department, Faculty, GeneratedPaper, NewFaculty,
        NewQuestion, NewTopic, Offering, Principal, Programme, Question, SectionSpec,
        SuperAdmin, Template, Topic,
    },
};
use async_trait::async_trait;

/// Academics service API for inter-module communication
#[async_trait]
pub trait AcademicsApi: Send + Sync {
    // ===== Authentication =====

    /// Verify a super admin email/password pair and return the principal
    async fn authenticate_super_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, AcademicsError>;

    /// Verify a faculty email/password pair and return the principal
    async fn authenticate_faculty(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, AcademicsError>;

    /// Resolve a session principal into an effective actor
    async fn resolve_actor(&self, principal: Option<Principal>) -> Result<Actor, AcademicsError>;

    /// Create a super admin account (bootstrap/seeding path)
    async fn seed_super_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SuperAdmin, AcademicsError>;

    // ===== Departments =====

    /// Create a department with a unique name
    async fn create_department(
        &self,
        principal: Option<Principal>,
        name: &str,
    ) -> Result<Department, AcademicsError>;

    /// List all departments
    async fn list_departments(
        &self,
        principal: Option<Principal>,
    ) -> Result<Vec<Department>, AcademicsError>;

    /// Delete a department and everything it owns
    async fn delete_department(
        &self,
        principal: Option<Principal>,
        department_id: i32,
    ) -> Result<(), AcademicsError>;

    /// Appoint a faculty member of the department as its head
    async fn assign_hod(
        &self,
        principal: Option<Principal>,
        department_id: i32,
        faculty_id: i32,
    ) -> Result<Department, AcademicsError>;

    // ===== Faculty =====

    /// Create a faculty account in a department
    async fn create_faculty(
        &self,
        principal: Option<Principal>,
        new_faculty: NewFaculty,
    ) -> Result<Faculty, AcademicsError>;

    /// List the faculty roster of a department
    async fn list_faculty(
        &self,
        principal: Option<Principal>,
        department_id: i32,
    ) -> Result<Vec<Faculty>, AcademicsError>;

    /// Delete a faculty account
    async fn delete_faculty(
        &self,
        principal: Option<Principal>,
        faculty_id: i32,
    ) -> Result<(), AcademicsError>;

    // ===== Programmes =====

    /// Create a programme under a department
    async fn create_programme(
        &self,
        principal: Option<Principal>,
        name: &str,
        department_id: i32,
    ) -> Result<Programme, AcademicsError>;

    /// List programmes of a department
    async fn list_programmes(
        &self,
        principal: Option<Principal>,
        department_id: i32,
    ) -> Result<Vec<Programme>, AcademicsError>;

    /// Delete a programme and its offerings
    async fn delete_programme(
        &self,
        principal: Option<Principal>,
        programme_id: i32,
    ) -> Result<(), AcademicsError>;

    // ===== Courses =====

    /// Create a course in the global catalogue
    async fn create_course(
        &self,
        principal: Option<Principal>,
        code: &str,
        title: &str,
        home_department_id: i32,
    ) -> Result<Course, AcademicsError>;

    /// Courses visible to the caller: all for super admins, home-department
    /// courses for heads of department, assigned courses for plain faculty
    async fn courses_for_actor(
        &self,
        principal: Option<Principal>,
    ) -> Result<Vec<Course>, AcademicsError>;

    /// Delete a course and its outcomes, topics, questions, template,
    /// offerings and generated papers
    async fn delete_course(
        &self,
        principal: Option<Principal>,
        course_id: i32,
    ) -> Result<(), AcademicsError>;

    // ===== Course outcomes =====

    /// Add a course outcome with a code unique within the course
    async fn add_course_outcome(
        &self,
        principal: Option<Principal>,
        course_id: i32,
        code: &str,
        description: &str,
    ) -> Result<CourseOutcome, AcademicsError>;

    /// List the outcomes of a course
    async fn list_course_outcomes(
        &self,
        principal: Option<Principal>,
        course_id: i32,
    ) -> Result<Vec<CourseOutcome>, AcademicsError>;

    // ===== Topics =====

    /// Add a syllabus topic under a course outcome
    async fn add_topic(
        &self,
        principal: Option<Principal>,
        new_topic: NewTopic,
    ) -> Result<Topic, AcademicsError>;

    /// Re-parent a topic within its course's topic tree
    async fn move_topic(
        &self,
        principal: Option<Principal>,
        topic_id: i32,
        new_parent_id: Option<i32>,
    ) -> Result<Topic, AcademicsError>;

    /// List the topics of a course
    async fn list_topics(
        &self,
        principal: Option<Principal>,
        course_id: i32,
    ) -> Result<Vec<Topic>, AcademicsError>;

    // ===== Questions =====

    /// Add a question to a course's bank
    async fn add_question(
        &self,
        principal: Option<Principal>,
        new_question: NewQuestion,
    ) -> Result<Question, AcademicsError>;

    /// List a course's questions, optionally only the active pool
    async fn list_questions(
        &self,
        principal: Option<Principal>,
        course_id: i32,
        active_only: bool,
    ) -> Result<Vec<Question>, AcademicsError>;

    /// Retire a question from the pool without touching old papers
    async fn retire_question(
        &self,
        principal: Option<Principal>,
        question_id: i32,
    ) -> Result<(), AcademicsError>;

    // ===== Offerings =====

    /// Place a course into a programme's curriculum for a semester
    async fn assign_course(
        &self,
        principal: Option<Principal>,
        programme_id: i32,
        course_id: i32,
        semester_no: i32,
        faculty_id: i32,
    ) -> Result<Offering, AcademicsError>;

    /// List the offerings of a programme
    async fn list_offerings(
        &self,
        principal: Option<Principal>,
        programme_id: i32,
    ) -> Result<Vec<Offering>, AcademicsError>;

    // ===== Templates =====

    /// Define the single exam template of a course
    async fn define_template(
        &self,
        principal: Option<Principal>,
        course_id: i32,
        duration_minutes: i32,
        total_marks: i32,
        sections: Vec<SectionSpec>,
    ) -> Result<Template, AcademicsError>;

    /// Fetch the template of a course
    async fn get_template(
        &self,
        principal: Option<Principal>,
        course_id: i32,
    ) -> Result<Template, AcademicsError>;

    // ===== Generated papers =====

    /// Assemble and persist an exam paper from the course's template
    async fn generate_paper(
        &self,
        principal: Option<Principal>,
        course_id: i32,
    ) -> Result<GeneratedPaper, AcademicsError>;

    /// List papers generated for a course
    async fn list_generated_papers(
        &self,
        principal: Option<Principal>,
        course_id: i32,
    ) -> Result<Vec<GeneratedPaper>, AcademicsError>;
}
