//! Contract models for academics service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Authenticated principal as delivered by the session layer
///
/// Carries only the identity table marker and row id; everything else
/// (department, head-of-department status) is resolved per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    /// Row id in the identity table selected by `role`
    pub user_id: i32,
    /// Which identity table `user_id` refers to
    pub role: RoleTag,
}

impl Principal {
    /// Principal for a super admin session
    pub fn super_admin(user_id: i32) -> Self {
        Self {
            user_id,
            role: RoleTag::SuperAdmin,
        }
    }

    /// Principal for a faculty session
    pub fn faculty(user_id: i32) -> Self {
        Self {
            user_id,
            role: RoleTag::Faculty,
        }
    }
}

/// Identity table marker carried in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleTag {
    SuperAdmin,
    Faculty,
}

/// Effective actor, resolved from a principal against current data
///
/// Head-of-department status is never stored on the faculty row; it is
/// derived from the department's `hod_id` at resolution time, so a
/// reassignment takes effect on the very next call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    /// Platform owner - unrestricted
    SuperAdmin,
    /// Faculty member currently referenced by their department's `hod_id`
    HeadOfDepartment {
        faculty: Faculty,
        department: Department,
    },
    /// Plain faculty member
    Faculty { faculty: Faculty },
}

impl Actor {
    /// Faculty row id behind this actor, if any
    pub fn faculty_id(&self) -> Option<i32> {
        match self {
            Self::SuperAdmin => None,
            Self::HeadOfDepartment { faculty, .. } | Self::Faculty { faculty } => {
                Some(faculty.id)
            }
        }
    }

    /// Department the actor administers, if any
    pub fn administered_department_id(&self) -> Option<i32> {
        match self {
            Self::HeadOfDepartment { department, .. } => Some(department.id),
            _ => None,
        }
    }
}

/// Super admin account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperAdmin {
    pub id: i32,
    /// Stored trimmed and lowercased
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Academic department
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: i32,
    /// Unique across departments
    pub name: String,
    /// Faculty currently acting as head of department
    pub hod_id: Option<i32>,
}

/// Faculty member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faculty {
    pub id: i32,
    pub name: String,
    /// Unique, stored trimmed and lowercased
    pub email: String,
    pub department_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Degree programme run by a department
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Programme {
    pub id: i32,
    pub name: String,
    pub department_id: i32,
}

/// Course in the global catalogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i32,
    /// Unique, stored trimmed and uppercased
    pub code: String,
    pub title: String,
    /// Owning department
    pub home_department_id: i32,
}

/// Course outcome (CO1, CO2, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseOutcome {
    pub id: i32,
    /// Unique within the course
    pub code: String,
    pub description: String,
    pub course_id: i32,
}

/// Syllabus topic, optionally nested under a parent topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: i32,
    /// Display code such as "1.1"
    pub code: Option<String>,
    pub title: String,
    pub course_id: i32,
    /// Course outcome this topic serves
    pub co_id: i32,
    pub parent_topic_id: Option<i32>,
}

/// Input for creating a topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTopic {
    pub course_id: i32,
    pub co_id: i32,
    pub code: Option<String>,
    pub title: String,
    pub parent_topic_id: Option<i32>,
}

/// Question in a course's bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i32,
    pub course_id: i32,
    pub topic_id: i32,
    pub text: String,
    pub mark_value: i32,
    /// Bloom taxonomy level label (e.g., "Apply")
    pub bloom_level: String,
    pub difficulty: Option<i32>,
    /// Retired questions stay referenced by old papers but leave the pool
    pub active: bool,
}

/// Input for adding a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub course_id: i32,
    pub topic_id: i32,
    pub text: String,
    pub mark_value: i32,
    pub bloom_level: String,
    pub difficulty: Option<i32>,
}

/// Input for creating a faculty account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFaculty {
    pub name: String,
    pub email: String,
    pub password: String,
    pub department_id: i32,
}

/// Course placed in a programme's curriculum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offering {
    pub id: i32,
    pub programme_id: i32,
    pub course_id: i32,
    /// Closed range 1..=8
    pub semester_no: i32,
    /// Faculty teaching this offering
    pub faculty_id: i32,
}

/// One section row of an exam template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpec {
    /// Section heading (e.g., "Part A")
    pub label: String,
    /// Question style for the section (e.g., "MCQ")
    pub question_type: String,
    pub mark_per_question: i32,
    pub number_of_questions: i32,
}

impl SectionSpec {
    /// Marks this section contributes to the paper total
    pub fn subtotal(&self) -> i64 {
        i64::from(self.mark_per_question) * i64::from(self.number_of_questions)
    }
}

/// Exam paper template; at most one per course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub id: i32,
    pub course_id: i32,
    pub duration_minutes: i32,
    pub total_marks: i32,
    /// Sections in the exact order they were defined
    pub sections: Vec<SectionSpec>,
    /// Optional bloom level percentages kept alongside the sections
    pub bloom_distribution: Option<serde_json::Value>,
}

/// Question placed into a generated paper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperQuestion {
    /// Position within the paper, numbered 1..n across all sections
    pub order: i32,
    pub question_id: i32,
    pub mark_value: i32,
    pub section_label: Option<String>,
    /// Course outcome code the question counts towards
    pub co_satisfied: Option<String>,
}

/// Generated exam paper with its frozen outcome weightages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPaper {
    pub id: i32,
    pub course_id: i32,
    pub template_id: i32,
    pub total_marks: i32,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
    /// Faculty who generated the paper; None for super admin runs
    pub generated_by: Option<i32>,
    /// Marks attributed per course outcome code at generation time;
    /// later outcome edits do not touch this snapshot
    pub co_weightages: BTreeMap<String, i32>,
    pub questions: Vec<PaperQuestion>,
}
