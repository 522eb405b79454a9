//! Domain service - business logic orchestration
//!
//! Every operation follows the same rhythm: resolve the actor from the
//! principal, authorize against the policy evaluator, validate inputs, then
//! touch the store. Nothing is written before every check has passed, so a
//! failed call leaves the store exactly as it was.

use super::credentials::CredentialVerifier;
use super::events::{AcademicsEvent, EventPublisher};
use super::hierarchy::{self, TopicTreeError};
use super::identity;
use super::paper;
use super::policy::{self, Action, CourseScope, Resource};
use super::repository::{NewFacultyRecord, NewPaperRecord, NewTemplateRecord, StoreError, Stores};
use super::validation;
use crate::config::Config;
use crate::contract::{
    AcademicsError, Actor, Course, CourseOutcome, Department, Faculty, GeneratedPaper, NewFaculty,
    NewQuestion, NewTopic, Offering, Principal, Programme, Question, RoleTag, SectionSpec,
    SuperAdmin, Template, Topic,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{info, warn};

/// Translate store failures into contract errors
///
/// Semantic conflicts keep their meaning; backend failures are logged and
/// flattened to Internal.
fn map_store_err(err: StoreError) -> AcademicsError {
    match err {
        StoreError::Duplicate { field, value } => AcademicsError::UniquenessViolation {
            field: field.to_string(),
            value,
        },
        StoreError::DuplicateOffering {
            programme_id,
            course_id,
        } => AcademicsError::DuplicateOffering {
            programme_id,
            course_id,
        },
        StoreError::DuplicateTemplate { course_id } => {
            AcademicsError::TemplateAlreadyExists { course_id }
        }
        StoreError::Backend(e) => {
            warn!(error = %e, "storage backend failure");
            AcademicsError::Internal
        }
    }
}

fn not_found(resource: &str, id: i32) -> AcademicsError {
    AcademicsError::NotFound {
        resource: resource.to_string(),
        id: id.to_string(),
    }
}

/// Domain service for academic administration
pub struct Service {
    stores: Stores,
    credentials: Arc<dyn CredentialVerifier>,
    event_publisher: Arc<dyn EventPublisher>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        stores: Stores,
        credentials: Arc<dyn CredentialVerifier>,
        event_publisher: Arc<dyn EventPublisher>,
        config: Config,
    ) -> Self {
        Self {
            stores,
            credentials,
            event_publisher,
            config,
        }
    }

    // ===== Authentication =====

    /// Verify a super admin email/password pair
    ///
    /// Wrong email and wrong password are indistinguishable to the caller.
    pub async fn authenticate_super_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, AcademicsError> {
        let email = validation::normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(AcademicsError::Validation {
                message: "email and password are required".to_string(),
            });
        }

        let admin = self
            .stores
            .super_admins
            .find_by_email(&email)
            .await
            .map_err(map_store_err)?
            .ok_or(AcademicsError::InvalidCredentials)?;

        let digest = self
            .stores
            .super_admins
            .digest_by_id(admin.id)
            .await
            .map_err(map_store_err)?
            .ok_or(AcademicsError::InvalidCredentials)?;

        if !self.credentials.verify(&digest, password) {
            return Err(AcademicsError::InvalidCredentials);
        }

        info!(user_id = admin.id, "super admin authenticated");
        Ok(Principal::super_admin(admin.id))
    }

    /// Verify a faculty email/password pair
    pub async fn authenticate_faculty(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, AcademicsError> {
        let email = validation::normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(AcademicsError::Validation {
                message: "email and password are required".to_string(),
            });
        }

        let faculty = self
            .stores
            .faculty
            .find_by_email(&email)
            .await
            .map_err(map_store_err)?
            .ok_or(AcademicsError::InvalidCredentials)?;

        let digest = self
            .stores
            .faculty
            .digest_by_id(faculty.id)
            .await
            .map_err(map_store_err)?
            .ok_or(AcademicsError::InvalidCredentials)?;

        if !self.credentials.verify(&digest, password) {
            return Err(AcademicsError::InvalidCredentials);
        }

        info!(user_id = faculty.id, "faculty authenticated");
        Ok(Principal::faculty(faculty.id))
    }

    /// Resolve a session principal into an effective actor
    ///
    /// Runs on every operation; head-of-department status always reflects
    /// the department row as it is right now.
    pub async fn resolve_actor(
        &self,
        principal: Option<Principal>,
    ) -> Result<Actor, AcademicsError> {
        let principal = principal.ok_or(AcademicsError::Unauthenticated)?;

        match principal.role {
            RoleTag::SuperAdmin => {
                self.stores
                    .super_admins
                    .find_by_id(principal.user_id)
                    .await
                    .map_err(map_store_err)?
                    .ok_or(AcademicsError::UnknownPrincipal {
                        user_id: principal.user_id,
                    })?;
                Ok(Actor::SuperAdmin)
            }
            RoleTag::Faculty => {
                let faculty = self
                    .stores
                    .faculty
                    .find_by_id(principal.user_id)
                    .await
                    .map_err(map_store_err)?
                    .ok_or(AcademicsError::UnknownPrincipal {
                        user_id: principal.user_id,
                    })?;

                // The faculty row's department is schema-guaranteed
                let department = self
                    .stores
                    .departments
                    .find_by_id(faculty.department_id)
                    .await
                    .map_err(map_store_err)?
                    .ok_or(AcademicsError::Internal)?;

                Ok(identity::classify(faculty, department))
            }
        }
    }

    /// Create a super admin account (bootstrap/seeding path)
    ///
    /// Deliberately unauthenticated: the host application decides when
    /// seeding is appropriate.
    pub async fn seed_super_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SuperAdmin, AcademicsError> {
        let email = validation::normalize_email(email);
        validation::validate_email(&email)?;
        validation::validate_password(password, self.config.min_password_length)?;

        let digest = self.credentials.hash(password)?;
        let admin = self
            .stores
            .super_admins
            .insert(&email, &digest)
            .await
            .map_err(map_store_err)?;

        info!(user_id = admin.id, "super admin created");
        Ok(admin)
    }

    // ===== Departments =====

    /// Create a department with a unique name
    pub async fn create_department(
        &self,
        principal: Option<Principal>,
        name: &str,
    ) -> Result<Department, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        policy::require(&actor, Action::Create, &Resource::Departments)?;

        let name = name.trim();
        validation::validate_name("department name", name)?;

        let department = self
            .stores
            .departments
            .insert(name)
            .await
            .map_err(map_store_err)?;

        info!(department_id = department.id, "department created");
        Ok(department)
    }

    /// List all departments
    pub async fn list_departments(
        &self,
        principal: Option<Principal>,
    ) -> Result<Vec<Department>, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        policy::require(&actor, Action::Read, &Resource::Departments)?;

        self.stores
            .departments
            .list_all()
            .await
            .map_err(map_store_err)
    }

    /// Delete a department and everything it owns
    pub async fn delete_department(
        &self,
        principal: Option<Principal>,
        department_id: i32,
    ) -> Result<(), AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        // Removing a department reshapes the catalogue; stays with the
        // super admin even for the department's own head
        policy::require(&actor, Action::Delete, &Resource::Departments)?;

        self.stores
            .departments
            .find_by_id(department_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("department", department_id))?;

        self.stores
            .departments
            .delete_cascade(department_id)
            .await
            .map_err(map_store_err)?;

        info!(department_id, "department deleted");
        self.publish(AcademicsEvent::department_deleted(department_id))
            .await;
        Ok(())
    }

    /// Appoint a faculty member of the department as its head
    ///
    /// Takes effect immediately: the next resolved actor for that faculty
    /// member is a head of department.
    pub async fn assign_hod(
        &self,
        principal: Option<Principal>,
        department_id: i32,
        faculty_id: i32,
    ) -> Result<Department, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        policy::require(&actor, Action::Update, &Resource::Department(department_id))?;

        self.stores
            .departments
            .find_by_id(department_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("department", department_id))?;

        let faculty = self
            .stores
            .faculty
            .find_by_id(faculty_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("faculty", faculty_id))?;

        if faculty.department_id != department_id {
            return Err(AcademicsError::CrossDepartmentHod {
                department_id,
                faculty_id,
            });
        }

        let department = self
            .stores
            .departments
            .set_hod(department_id, Some(faculty_id))
            .await
            .map_err(map_store_err)?;

        info!(department_id, faculty_id, "head of department assigned");
        self.publish(AcademicsEvent::hod_assigned(department_id, faculty_id))
            .await;
        Ok(department)
    }

    // ===== Faculty =====

    /// Create a faculty account in a department
    pub async fn create_faculty(
        &self,
        principal: Option<Principal>,
        new_faculty: NewFaculty,
    ) -> Result<Faculty, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        policy::require(
            &actor,
            Action::Create,
            &Resource::FacultyRoster(new_faculty.department_id),
        )?;

        let name = new_faculty.name.trim();
        let email = validation::normalize_email(&new_faculty.email);
        validation::validate_name("faculty name", name)?;
        validation::validate_email(&email)?;
        validation::validate_password(&new_faculty.password, self.config.min_password_length)?;

        self.stores
            .departments
            .find_by_id(new_faculty.department_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("department", new_faculty.department_id))?;

        let record = NewFacultyRecord {
            name: name.to_string(),
            email,
            password_digest: self.credentials.hash(&new_faculty.password)?,
            department_id: new_faculty.department_id,
        };

        let faculty = self
            .stores
            .faculty
            .insert(&record)
            .await
            .map_err(map_store_err)?;

        info!(
            faculty_id = faculty.id,
            department_id = faculty.department_id,
            "faculty created"
        );
        Ok(faculty)
    }

    /// List the faculty roster of a department
    pub async fn list_faculty(
        &self,
        principal: Option<Principal>,
        department_id: i32,
    ) -> Result<Vec<Faculty>, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        policy::require(&actor, Action::Read, &Resource::FacultyRoster(department_id))?;

        self.stores
            .departments
            .find_by_id(department_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("department", department_id))?;

        self.stores
            .faculty
            .list_by_department(department_id)
            .await
            .map_err(map_store_err)
    }

    /// Delete a faculty account along with their teaching assignments
    pub async fn delete_faculty(
        &self,
        principal: Option<Principal>,
        faculty_id: i32,
    ) -> Result<(), AcademicsError> {
        let actor = self.resolve_actor(principal).await?;

        let faculty = self
            .stores
            .faculty
            .find_by_id(faculty_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("faculty", faculty_id))?;

        policy::require(
            &actor,
            Action::Delete,
            &Resource::FacultyRoster(faculty.department_id),
        )?;

        self.stores
            .faculty
            .delete(faculty_id)
            .await
            .map_err(map_store_err)?;

        info!(faculty_id, "faculty deleted");
        Ok(())
    }

    // ===== Programmes =====

    /// Create a programme under a department
    pub async fn create_programme(
        &self,
        principal: Option<Principal>,
        name: &str,
        department_id: i32,
    ) -> Result<Programme, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        policy::require(&actor, Action::Create, &Resource::Programmes(department_id))?;

        let name = name.trim();
        validation::validate_name("programme name", name)?;

        self.stores
            .departments
            .find_by_id(department_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("department", department_id))?;

        let programme = self
            .stores
            .programmes
            .insert(name, department_id)
            .await
            .map_err(map_store_err)?;

        info!(programme_id = programme.id, department_id, "programme created");
        Ok(programme)
    }

    /// List programmes of a department
    pub async fn list_programmes(
        &self,
        principal: Option<Principal>,
        department_id: i32,
    ) -> Result<Vec<Programme>, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        policy::require(&actor, Action::Read, &Resource::Programmes(department_id))?;

        self.stores
            .departments
            .find_by_id(department_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("department", department_id))?;

        self.stores
            .programmes
            .list_by_department(department_id)
            .await
            .map_err(map_store_err)
    }

    /// Delete a programme and its offerings
    pub async fn delete_programme(
        &self,
        principal: Option<Principal>,
        programme_id: i32,
    ) -> Result<(), AcademicsError> {
        let actor = self.resolve_actor(principal).await?;

        let programme = self
            .stores
            .programmes
            .find_by_id(programme_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("programme", programme_id))?;

        policy::require(
            &actor,
            Action::Delete,
            &Resource::Programmes(programme.department_id),
        )?;

        self.stores
            .programmes
            .delete_cascade(programme_id)
            .await
            .map_err(map_store_err)?;

        info!(programme_id, "programme deleted");
        Ok(())
    }

    // ===== Courses =====

    /// Create a course in the global catalogue
    pub async fn create_course(
        &self,
        principal: Option<Principal>,
        code: &str,
        title: &str,
        home_department_id: i32,
    ) -> Result<Course, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        policy::require(
            &actor,
            Action::Create,
            &Resource::Course(CourseScope {
                home_department_id,
                assigned_faculty_ids: Vec::new(),
            }),
        )?;

        let code = validation::normalize_course_code(code);
        let title = title.trim();
        validation::validate_course_code(&code)?;
        validation::validate_name("course title", title)?;

        self.stores
            .departments
            .find_by_id(home_department_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("department", home_department_id))?;

        let course = self
            .stores
            .courses
            .insert(&code, title, home_department_id)
            .await
            .map_err(map_store_err)?;

        info!(course_id = course.id, code = %course.code, "course created");
        Ok(course)
    }

    /// Courses visible to the caller
    ///
    /// Super admins get the whole catalogue, heads of department their home
    /// courses, plain faculty the courses they are assigned to teach.
    pub async fn courses_for_actor(
        &self,
        principal: Option<Principal>,
    ) -> Result<Vec<Course>, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;

        match &actor {
            Actor::SuperAdmin => self.stores.courses.list_all().await.map_err(map_store_err),
            Actor::HeadOfDepartment { department, .. } => self
                .stores
                .courses
                .list_by_department(department.id)
                .await
                .map_err(map_store_err),
            Actor::Faculty { faculty } => {
                let offerings = self
                    .stores
                    .offerings
                    .list_by_faculty(faculty.id)
                    .await
                    .map_err(map_store_err)?;

                let ids: BTreeSet<i32> = offerings.iter().map(|o| o.course_id).collect();
                let ids: Vec<i32> = ids.into_iter().collect();
                self.stores
                    .courses
                    .list_by_ids(&ids)
                    .await
                    .map_err(map_store_err)
            }
        }
    }

    /// Delete a course and everything hanging off it
    pub async fn delete_course(
        &self,
        principal: Option<Principal>,
        course_id: i32,
    ) -> Result<(), AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        let course = self.load_course(course_id).await?;
        let scope = self.scope_for(&course).await?;
        policy::require(&actor, Action::Delete, &Resource::Course(scope))?;

        self.stores
            .courses
            .delete_cascade(course_id)
            .await
            .map_err(map_store_err)?;

        info!(course_id, "course deleted");
        Ok(())
    }

    // ===== Course outcomes =====

    /// Add a course outcome with a code unique within the course
    pub async fn add_course_outcome(
        &self,
        principal: Option<Principal>,
        course_id: i32,
        code: &str,
        description: &str,
    ) -> Result<CourseOutcome, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        let course = self.load_course(course_id).await?;
        let scope = self.scope_for(&course).await?;
        policy::require(&actor, Action::Create, &Resource::Syllabus(scope))?;

        let code = code.trim();
        let description = description.trim();
        validation::validate_name("outcome code", code)?;
        validation::validate_name("outcome description", description)?;

        let outcome = self
            .stores
            .syllabus
            .insert_outcome(course_id, code, description)
            .await
            .map_err(map_store_err)?;

        info!(course_id, outcome_id = outcome.id, "course outcome added");
        Ok(outcome)
    }

    /// List the outcomes of a course
    pub async fn list_course_outcomes(
        &self,
        principal: Option<Principal>,
        course_id: i32,
    ) -> Result<Vec<CourseOutcome>, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        let course = self.load_course(course_id).await?;
        let scope = self.scope_for(&course).await?;
        policy::require(&actor, Action::Read, &Resource::Syllabus(scope))?;

        self.stores
            .syllabus
            .list_outcomes(course_id)
            .await
            .map_err(map_store_err)
    }

    // ===== Topics =====

    /// Add a syllabus topic under a course outcome
    pub async fn add_topic(
        &self,
        principal: Option<Principal>,
        new_topic: NewTopic,
    ) -> Result<Topic, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        let course = self.load_course(new_topic.course_id).await?;
        let scope = self.scope_for(&course).await?;
        policy::require(&actor, Action::Create, &Resource::Syllabus(scope))?;

        validation::validate_name("topic title", &new_topic.title)?;

        let outcome = self
            .stores
            .syllabus
            .find_outcome(new_topic.co_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("course outcome", new_topic.co_id))?;
        if outcome.course_id != new_topic.course_id {
            return Err(AcademicsError::Validation {
                message: "outcome belongs to a different course".to_string(),
            });
        }

        if let Some(parent_id) = new_topic.parent_topic_id {
            let parent = self
                .stores
                .syllabus
                .find_topic(parent_id)
                .await
                .map_err(map_store_err)?
                .ok_or_else(|| not_found("topic", parent_id))?;
            if parent.course_id != new_topic.course_id {
                return Err(AcademicsError::Validation {
                    message: "parent topic belongs to a different course".to_string(),
                });
            }
        }

        let topic = self
            .stores
            .syllabus
            .insert_topic(&new_topic)
            .await
            .map_err(map_store_err)?;

        info!(course_id = topic.course_id, topic_id = topic.id, "topic added");
        Ok(topic)
    }

    /// Re-parent a topic within its course's topic tree
    ///
    /// Walks the would-be parent's ancestry first; a move that closes a
    /// loop is rejected with nothing written.
    pub async fn move_topic(
        &self,
        principal: Option<Principal>,
        topic_id: i32,
        new_parent_id: Option<i32>,
    ) -> Result<Topic, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;

        let topic = self
            .stores
            .syllabus
            .find_topic(topic_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("topic", topic_id))?;

        let course = self.load_course(topic.course_id).await?;
        let scope = self.scope_for(&course).await?;
        policy::require(&actor, Action::Update, &Resource::Syllabus(scope))?;

        if let Some(parent_id) = new_parent_id {
            let parent = self
                .stores
                .syllabus
                .find_topic(parent_id)
                .await
                .map_err(map_store_err)?
                .ok_or_else(|| not_found("topic", parent_id))?;
            if parent.course_id != topic.course_id {
                return Err(AcademicsError::Validation {
                    message: "parent topic belongs to a different course".to_string(),
                });
            }

            let topics = self
                .stores
                .syllabus
                .list_topics(topic.course_id)
                .await
                .map_err(map_store_err)?;
            let parents = hierarchy::parent_map(&topics);
            let cycles = hierarchy::reparent_creates_cycle(&parents, topic_id, parent_id)
                .map_err(|e| match e {
                    TopicTreeError::CircularReference(_) => {
                        AcademicsError::TopicCycle { topic_id }
                    }
                    TopicTreeError::TooDeep => AcademicsError::Validation {
                        message: "topic tree too deep".to_string(),
                    },
                    TopicTreeError::TopicNotFound(_) => AcademicsError::Internal,
                })?;
            if cycles {
                return Err(AcademicsError::TopicCycle { topic_id });
            }
        }

        let topic = self
            .stores
            .syllabus
            .set_topic_parent(topic_id, new_parent_id)
            .await
            .map_err(map_store_err)?;

        info!(topic_id, "topic moved");
        Ok(topic)
    }

    /// List the topics of a course
    pub async fn list_topics(
        &self,
        principal: Option<Principal>,
        course_id: i32,
    ) -> Result<Vec<Topic>, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        let course = self.load_course(course_id).await?;
        let scope = self.scope_for(&course).await?;
        policy::require(&actor, Action::Read, &Resource::Syllabus(scope))?;

        self.stores
            .syllabus
            .list_topics(course_id)
            .await
            .map_err(map_store_err)
    }

    // ===== Questions =====

    /// Add a question to a course's bank
    pub async fn add_question(
        &self,
        principal: Option<Principal>,
        new_question: NewQuestion,
    ) -> Result<Question, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        let course = self.load_course(new_question.course_id).await?;
        let scope = self.scope_for(&course).await?;
        policy::require(&actor, Action::Create, &Resource::Questions(scope))?;

        validation::validate_question_fields(
            &new_question.text,
            new_question.mark_value,
            &new_question.bloom_level,
        )?;

        let topic = self
            .stores
            .syllabus
            .find_topic(new_question.topic_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("topic", new_question.topic_id))?;
        if topic.course_id != new_question.course_id {
            return Err(AcademicsError::Validation {
                message: "topic belongs to a different course".to_string(),
            });
        }

        let question = self
            .stores
            .questions
            .insert(&new_question)
            .await
            .map_err(map_store_err)?;

        info!(
            course_id = question.course_id,
            question_id = question.id,
            "question added"
        );
        Ok(question)
    }

    /// List a course's questions, optionally only the active pool
    pub async fn list_questions(
        &self,
        principal: Option<Principal>,
        course_id: i32,
        active_only: bool,
    ) -> Result<Vec<Question>, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        let course = self.load_course(course_id).await?;
        let scope = self.scope_for(&course).await?;
        policy::require(&actor, Action::Read, &Resource::Questions(scope))?;

        self.stores
            .questions
            .list_by_course(course_id, active_only)
            .await
            .map_err(map_store_err)
    }

    /// Retire a question from the pool
    ///
    /// The row survives so old papers keep their references; it just stops
    /// being eligible for new papers.
    pub async fn retire_question(
        &self,
        principal: Option<Principal>,
        question_id: i32,
    ) -> Result<(), AcademicsError> {
        let actor = self.resolve_actor(principal).await?;

        let question = self
            .stores
            .questions
            .find_by_id(question_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("question", question_id))?;

        let course = self.load_course(question.course_id).await?;
        let scope = self.scope_for(&course).await?;
        policy::require(&actor, Action::Delete, &Resource::Questions(scope))?;

        self.stores
            .questions
            .set_active(question_id, false)
            .await
            .map_err(map_store_err)?;

        info!(question_id, "question retired");
        self.publish(AcademicsEvent::question_retired(
            question_id,
            question.course_id,
        ))
        .await;
        Ok(())
    }

    // ===== Offerings =====

    /// Place a course into a programme's curriculum for a semester
    ///
    /// The duplicate check and the insert run in one transaction; under a
    /// race the second writer reports the duplicate and the original row
    /// is untouched.
    pub async fn assign_course(
        &self,
        principal: Option<Principal>,
        programme_id: i32,
        course_id: i32,
        semester_no: i32,
        faculty_id: i32,
    ) -> Result<Offering, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;

        let programme = self
            .stores
            .programmes
            .find_by_id(programme_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("programme", programme_id))?;

        policy::require(
            &actor,
            Action::Create,
            &Resource::Offerings(programme.department_id),
        )?;

        validation::validate_semester(semester_no)?;

        self.stores
            .courses
            .find_by_id(course_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("course", course_id))?;

        self.stores
            .faculty
            .find_by_id(faculty_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("faculty", faculty_id))?;

        let offering = self
            .stores
            .offerings
            .insert_unique(programme_id, course_id, semester_no, faculty_id)
            .await
            .map_err(map_store_err)?;

        info!(
            offering_id = offering.id,
            programme_id, course_id, semester_no, faculty_id, "course assigned"
        );
        self.publish(AcademicsEvent::course_assigned(&offering)).await;
        Ok(offering)
    }

    /// List the offerings of a programme
    pub async fn list_offerings(
        &self,
        principal: Option<Principal>,
        programme_id: i32,
    ) -> Result<Vec<Offering>, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;

        let programme = self
            .stores
            .programmes
            .find_by_id(programme_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("programme", programme_id))?;

        policy::require(
            &actor,
            Action::Read,
            &Resource::Offerings(programme.department_id),
        )?;

        self.stores
            .offerings
            .list_by_programme(programme_id)
            .await
            .map_err(map_store_err)
    }

    // ===== Templates =====

    /// Define the single exam template of a course
    ///
    /// Authorization runs before any validation, so an unassigned faculty
    /// member learns nothing about the template's state. The
    /// already-exists check precedes the section arithmetic to match the
    /// error precedence callers rely on.
    pub async fn define_template(
        &self,
        principal: Option<Principal>,
        course_id: i32,
        duration_minutes: i32,
        total_marks: i32,
        sections: Vec<SectionSpec>,
    ) -> Result<Template, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        let course = self.load_course(course_id).await?;
        let scope = self.scope_for(&course).await?;
        policy::require(&actor, Action::Create, &Resource::Template(scope))?;

        if self
            .stores
            .templates
            .find_by_course(course_id)
            .await
            .map_err(map_store_err)?
            .is_some()
        {
            return Err(AcademicsError::TemplateAlreadyExists { course_id });
        }

        validation::validate_template(duration_minutes, total_marks, &sections)?;

        let record = NewTemplateRecord {
            course_id,
            duration_minutes,
            total_marks,
            sections,
        };

        // The transactional insert catches a racing writer that slipped in
        // after the check above
        let template = self
            .stores
            .templates
            .insert_unique(&record)
            .await
            .map_err(map_store_err)?;

        info!(course_id, template_id = template.id, "template defined");
        self.publish(AcademicsEvent::template_defined(&template)).await;
        Ok(template)
    }

    /// Fetch the template of a course
    pub async fn get_template(
        &self,
        principal: Option<Principal>,
        course_id: i32,
    ) -> Result<Template, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        let course = self.load_course(course_id).await?;
        let scope = self.scope_for(&course).await?;
        policy::require(&actor, Action::Read, &Resource::Template(scope))?;

        self.stores
            .templates
            .find_by_course(course_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("template", course_id))
    }

    // ===== Generated papers =====

    /// Assemble and persist an exam paper from the course's template
    pub async fn generate_paper(
        &self,
        principal: Option<Principal>,
        course_id: i32,
    ) -> Result<GeneratedPaper, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        let course = self.load_course(course_id).await?;
        let scope = self.scope_for(&course).await?;
        policy::require(&actor, Action::Create, &Resource::Papers(scope))?;

        let template = self
            .stores
            .templates
            .find_by_course(course_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("template", course_id))?;

        let questions = self
            .stores
            .questions
            .list_by_course(course_id, true)
            .await
            .map_err(map_store_err)?;
        let topics = self
            .stores
            .syllabus
            .list_topics(course_id)
            .await
            .map_err(map_store_err)?;
        let outcomes = self
            .stores
            .syllabus
            .list_outcomes(course_id)
            .await
            .map_err(map_store_err)?;

        let plan = paper::assemble(&template.sections, &questions, &topics, &outcomes)?;

        let record = NewPaperRecord {
            course_id,
            template_id: template.id,
            total_marks: template.total_marks,
            duration_minutes: template.duration_minutes,
            generated_by: actor.faculty_id(),
            co_weightages: plan.co_weightages,
            questions: plan.placements,
        };

        let paper = self
            .stores
            .papers
            .insert(&record)
            .await
            .map_err(map_store_err)?;

        info!(course_id, paper_id = paper.id, "paper generated");
        self.publish(AcademicsEvent::paper_generated(&paper)).await;
        Ok(paper)
    }

    /// List papers generated for a course
    pub async fn list_generated_papers(
        &self,
        principal: Option<Principal>,
        course_id: i32,
    ) -> Result<Vec<GeneratedPaper>, AcademicsError> {
        let actor = self.resolve_actor(principal).await?;
        let course = self.load_course(course_id).await?;
        let scope = self.scope_for(&course).await?;
        policy::require(&actor, Action::Read, &Resource::Papers(scope))?;

        self.stores
            .papers
            .list_by_course(course_id)
            .await
            .map_err(map_store_err)
    }

    // ===== Helper Methods =====

    async fn load_course(&self, course_id: i32) -> Result<Course, AcademicsError> {
        self.stores
            .courses
            .find_by_id(course_id)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| not_found("course", course_id))
    }

    /// Ownership facts for the policy evaluator, from current offerings
    async fn scope_for(&self, course: &Course) -> Result<CourseScope, AcademicsError> {
        let offerings = self
            .stores
            .offerings
            .list_by_course(course.id)
            .await
            .map_err(map_store_err)?;

        Ok(CourseScope {
            home_department_id: course.home_department_id,
            assigned_faculty_ids: offerings.iter().map(|o| o.faculty_id).collect(),
        })
    }

    async fn publish(&self, event: AcademicsEvent) {
        if !self.config.enable_audit_events {
            return;
        }
        if let Err(e) = self.event_publisher.publish(event).await {
            // Log error but don't fail the operation
            warn!(error = %e, "Failed to publish audit event");
        }
    }
}
