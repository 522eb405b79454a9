//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    AcademicsApi, AcademicsError, Actor, Course, CourseOutcome, Department, Faculty,
    GeneratedPaper, NewFaculty, NewQuestion, NewTopic, Offering, Principal, Programme, Question,
    SectionSpec, SuperAdmin, Template, Topic,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AcademicsApi for NativeClient {
    async fn authenticate_super_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, AcademicsError> {
        self.service.authenticate_super_admin(email, password).await
    }

    async fn authenticate_faculty(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, AcademicsError> {
        self.service.authenticate_faculty(email, password).await
    }

    async fn resolve_actor(&self, principal: Option<Principal>) -> Result<Actor, AcademicsError> {
        self.service.resolve_actor(principal).await
    }

    async fn seed_super_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SuperAdmin, AcademicsError> {
        self.service.seed_super_admin(email, password).await
    }

    async fn create_department(
        &self,
        principal: Option<Principal>,
        name: &str,
    ) -> Result<Department, AcademicsError> {
        self.service.create_department(principal, name).await
    }

    async fn list_departments(
        &self,
        principal: Option<Principal>,
    ) -> Result<Vec<Department>, AcademicsError> {
        self.service.list_departments(principal).await
    }

    async fn delete_department(
        &self,
        principal: Option<Principal>,
        department_id: i32,
    ) -> Result<(), AcademicsError> {
        self.service.delete_department(principal, department_id).await
    }

    async fn assign_hod(
        &self,
        principal: Option<Principal>,
        department_id: i32,
        faculty_id: i32,
    ) -> Result<Department, AcademicsError> {
        self.service
            .assign_hod(principal, department_id, faculty_id)
            .await
    }

    async fn create_faculty(
        &self,
        principal: Option<Principal>,
        new_faculty: NewFaculty,
    ) -> Result<Faculty, AcademicsError> {
        self.service.create_faculty(principal, new_faculty).await
    }

    async fn list_faculty(
        &self,
        principal: Option<Principal>,
        department_id: i32,
    ) -> Result<Vec<Faculty>, AcademicsError> {
        self.service.list_faculty(principal, department_id).await
    }

    async fn delete_faculty(
        &self,
        principal: Option<Principal>,
        faculty_id: i32,
    ) -> Result<(), AcademicsError> {
        self.service.delete_faculty(principal, faculty_id).await
    }

    async fn create_programme(
        &self,
        principal: Option<Principal>,
        name: &str,
        department_id: i32,
    ) -> Result<Programme, AcademicsError> {
        self.service
            .create_programme(principal, name, department_id)
            .await
    }

    async fn list_programmes(
        &self,
        principal: Option<Principal>,
        department_id: i32,
    ) -> Result<Vec<Programme>, AcademicsError> {
        self.service.list_programmes(principal, department_id).await
    }

    async fn delete_programme(
        &self,
        principal: Option<Principal>,
        programme_id: i32,
    ) -> Result<(), AcademicsError> {
        self.service.delete_programme(principal, programme_id).await
    }

    async fn create_course(
        &self,
        principal: Option<Principal>,
        code: &str,
        title: &str,
        home_department_id: i32,
    ) -> Result<Course, AcademicsError> {
        self.service
            .create_course(principal, code, title, home_department_id)
            .await
    }

    async fn courses_for_actor(
        &self,
        principal: Option<Principal>,
    ) -> Result<Vec<Course>, AcademicsError> {
        self.service.courses_for_actor(principal).await
    }

    async fn delete_course(
        &self,
        principal: Option<Principal>,
        course_id: i32,
    ) -> Result<(), AcademicsError> {
        self.service.delete_course(principal, course_id).await
    }

    async fn add_course_outcome(
        &self,
        principal: Option<Principal>,
        course_id: i32,
        code: &str,
        description: &str,
    ) -> Result<CourseOutcome, AcademicsError> {
        self.service
            .add_course_outcome(principal, course_id, code, description)
            .await
    }

    async fn list_course_outcomes(
        &self,
        principal: Option<Principal>,
        course_id: i32,
    ) -> Result<Vec<CourseOutcome>, AcademicsError> {
        self.service.list_course_outcomes(principal, course_id).await
    }

    async fn add_topic(
        &self,
        principal: Option<Principal>,
        new_topic: NewTopic,
    ) -> Result<Topic, AcademicsError> {
        self.service.add_topic(principal, new_topic).await
    }

    async fn move_topic(
        &self,
        principal: Option<Principal>,
        topic_id: i32,
        new_parent_id: Option<i32>,
    ) -> Result<Topic, AcademicsError> {
        self.service
            .move_topic(principal, topic_id, new_parent_id)
            .await
    }

    async fn list_topics(
        &self,
        principal: Option<Principal>,
        course_id: i32,
    ) -> Result<Vec<Topic>, AcademicsError> {
        self.service.list_topics(principal, course_id).await
    }

    async fn add_question(
        &self,
        principal: Option<Principal>,
        new_question: NewQuestion,
    ) -> Result<Question, AcademicsError> {
        self.service.add_question(principal, new_question).await
    }

    async fn list_questions(
        &self,
        principal: Option<Principal>,
        course_id: i32,
        active_only: bool,
    ) -> Result<Vec<Question>, AcademicsError> {
        self.service
            .list_questions(principal, course_id, active_only)
            .await
    }

    async fn retire_question(
        &self,
        principal: Option<Principal>,
        question_id: i32,
    ) -> Result<(), AcademicsError> {
        self.service.retire_question(principal, question_id).await
    }

    async fn assign_course(
        &self,
        principal: Option<Principal>,
        programme_id: i32,
        course_id: i32,
        semester_no: i32,
        faculty_id: i32,
    ) -> Result<Offering, AcademicsError> {
        self.service
            .assign_course(principal, programme_id, course_id, semester_no, faculty_id)
            .await
    }

    async fn list_offerings(
        &self,
        principal: Option<Principal>,
        programme_id: i32,
    ) -> Result<Vec<Offering>, AcademicsError> {
        self.service.list_offerings(principal, programme_id).await
    }

    async fn define_template(
        &self,
        principal: Option<Principal>,
        course_id: i32,
        duration_minutes: i32,
        total_marks: i32,
        sections: Vec<SectionSpec>,
    ) -> Result<Template, AcademicsError> {
        self.service
            .define_template(principal, course_id, duration_minutes, total_marks, sections)
            .await
    }

    async fn get_template(
        &self,
        principal: Option<Principal>,
        course_id: i32,
    ) -> Result<Template, AcademicsError> {
        self.service.get_template(principal, course_id).await
    }

    async fn generate_paper(
        &self,
        principal: Option<Principal>,
        course_id: i32,
    ) -> Result<GeneratedPaper, AcademicsError> {
        self.service.generate_paper(principal, course_id).await
    }

    async fn list_generated_papers(
        &self,
        principal: Option<Principal>,
        course_id: i32,
    ) -> Result<Vec<GeneratedPaper>, AcademicsError> {
        self.service.list_generated_papers(principal, course_id).await
    }
}
