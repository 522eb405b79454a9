//! Access policy evaluation
//!
//! A pure decision function over (actor, action, resource). No I/O and no
//! error paths: the evaluator answers Allow or Deny and nothing else, so it
//! can be table-tested exhaustively. Callers translate Deny into
//! [`AcademicsError::AccessDenied`] via [`require`] before touching the
//! store.
//!
//! Course-scoped resources carry their owning department and the currently
//! assigned faculty ids, captured from offerings at call time. The evaluator
//! never loads data itself; whoever builds the [`Resource`] decides how
//! fresh the scope is.

use crate::contract::{AcademicsError, Actor};

/// What the caller wants to do with the resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

/// Evaluation outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

/// Ownership facts about a course, captured at call time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseScope {
    /// Department owning the course
    pub home_department_id: i32,
    /// Faculty currently teaching an offering of the course
    pub assigned_faculty_ids: Vec<i32>,
}

impl CourseScope {
    fn is_assigned(&self, faculty_id: i32) -> bool {
        self.assigned_faculty_ids.contains(&faculty_id)
    }
}

/// Resource being acted upon
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// The department catalogue as a whole (create/list departments)
    Departments,
    /// A single department record, including its HOD appointment
    Department(i32),
    /// The faculty roster of a department
    FacultyRoster(i32),
    /// The programmes of a department
    Programmes(i32),
    /// The curriculum (offerings) of a department's programmes
    Offerings(i32),
    /// A course record
    Course(CourseScope),
    /// The syllabus of a course: outcomes and their topic tree
    Syllabus(CourseScope),
    /// The question bank of a course
    Questions(CourseScope),
    /// The single exam template of a course
    Template(CourseScope),
    /// Generated papers of a course
    Papers(CourseScope),
}

/// Decide whether `actor` may perform `action` on `resource`
pub fn authorize(actor: &Actor, action: Action, resource: &Resource) -> Decision {
    match actor {
        Actor::SuperAdmin => Decision::Allow,

        Actor::HeadOfDepartment { department, .. } => {
            let own = department.id;
            let allowed = match resource {
                // The catalogue itself stays with the super admin
                Resource::Departments => false,
                Resource::Department(dept_id)
                | Resource::FacultyRoster(dept_id)
                | Resource::Programmes(dept_id)
                | Resource::Offerings(dept_id) => *dept_id == own,
                Resource::Course(scope)
                | Resource::Syllabus(scope)
                | Resource::Questions(scope)
                | Resource::Template(scope)
                | Resource::Papers(scope) => scope.home_department_id == own,
            };
            if allowed {
                Decision::Allow
            } else {
                Decision::Deny
            }
        }

        Actor::Faculty { faculty } => {
            let allowed = match (resource, action) {
                // Assigned courses are readable: the syllabus and the bank
                (Resource::Course(scope), Action::Read)
                | (Resource::Syllabus(scope), Action::Read)
                | (Resource::Questions(scope), Action::Read) => scope.is_assigned(faculty.id),
                // Templates and papers are the teaching surface: full access
                // on assigned courses
                (Resource::Template(scope), _) | (Resource::Papers(scope), _) => {
                    scope.is_assigned(faculty.id)
                }
                // No administrative surface at all
                _ => false,
            };
            if allowed {
                Decision::Allow
            } else {
                Decision::Deny
            }
        }
    }
}

/// Translate a Deny into the contract error
pub fn require(actor: &Actor, action: Action, resource: &Resource) -> Result<(), AcademicsError> {
    match authorize(actor, action, resource) {
        Decision::Allow => Ok(()),
        Decision::Deny => Err(AcademicsError::AccessDenied),
    }
}
