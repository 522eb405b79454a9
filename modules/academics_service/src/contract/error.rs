//! Contract error types for academics service
//!
//! These errors are transport-agnostic and used for inter-module communication.

/// Academics service domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcademicsError {
    /// No principal was supplied with the request
    Unauthenticated,
    /// Principal references an identity row that no longer exists
    UnknownPrincipal {
        /// Stale row id carried by the session
        user_id: i32,
    },
    /// Email/password pair did not match a stored account
    InvalidCredentials,
    /// Policy evaluated to Deny for this actor/action/resource
    AccessDenied,
    /// Referenced entity does not exist
    NotFound {
        /// Resource type (department, faculty, programme, course, ...)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// Semester outside the closed range 1..=8
    InvalidSemester {
        /// Rejected value
        semester_no: i32,
    },
    /// Programme already offers this course
    DuplicateOffering {
        programme_id: i32,
        course_id: i32,
    },
    /// Course already has its single template
    TemplateAlreadyExists {
        course_id: i32,
    },
    /// Section subtotals do not add up to the declared total
    MarkMismatch {
        /// Declared total marks
        declared: i32,
        /// Sum over sections of mark_per_question * number_of_questions
        calculated: i64,
    },
    /// Template defined with no sections
    EmptySections,
    /// Unique column constraint would be violated (name, email, code)
    UniquenessViolation {
        /// Offending field (department name, faculty email, course code, outcome code)
        field: String,
        /// Rejected value
        value: String,
    },
    /// Head of department must belong to the department they head
    CrossDepartmentHod {
        department_id: i32,
        faculty_id: i32,
    },
    /// Re-parenting a topic would create a cycle in the topic tree
    TopicCycle {
        topic_id: i32,
    },
    /// Question bank cannot fill a template section
    QuestionPoolExhausted {
        /// Section that could not be filled
        section_label: String,
        /// Questions still needed for the section
        missing: i32,
    },
    /// Validation error
    Validation {
        /// Validation error message
        message: String,
    },
    /// Internal error
    Internal,
}

impl std::fmt::Display for AcademicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthenticated => {
                write!(f, "Not authenticated")
            }
            Self::UnknownPrincipal { user_id } => {
                write!(f, "Unknown principal: {}", user_id)
            }
            Self::InvalidCredentials => {
                write!(f, "Invalid credentials")
            }
            Self::AccessDenied => {
                write!(f, "Access denied")
            }
            Self::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            Self::InvalidSemester { semester_no } => {
                write!(f, "Semester out of range (1-8): {}", semester_no)
            }
            Self::DuplicateOffering {
                programme_id,
                course_id,
            } => {
                write!(
                    f,
                    "Programme {} already offers course {}",
                    programme_id, course_id
                )
            }
            Self::TemplateAlreadyExists { course_id } => {
                write!(f, "Template already exists for course {}", course_id)
            }
            Self::MarkMismatch {
                declared,
                calculated,
            } => {
                write!(
                    f,
                    "Section marks add up to {} but total is declared as {}",
                    calculated, declared
                )
            }
            Self::EmptySections => {
                write!(f, "Template must contain at least one section")
            }
            Self::UniquenessViolation { field, value } => {
                write!(f, "Duplicate {}: {}", field, value)
            }
            Self::CrossDepartmentHod {
                department_id,
                faculty_id,
            } => {
                write!(
                    f,
                    "Faculty {} does not belong to department {}",
                    faculty_id, department_id
                )
            }
            Self::TopicCycle { topic_id } => {
                write!(f, "Moving topic {} would create a cycle", topic_id)
            }
            Self::QuestionPoolExhausted {
                section_label,
                missing,
            } => {
                write!(
                    f,
                    "Question pool exhausted for section '{}': {} more needed",
                    section_label, missing
                )
            }
            Self::Validation { message } => {
                write!(f, "Validation error: {}", message)
            }
            Self::Internal => {
                write!(f, "Internal error")
            }
        }
    }
}

impl std::error::Error for AcademicsError {}
