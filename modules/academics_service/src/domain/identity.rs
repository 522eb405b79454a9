//! Actor classification
//!
//! Turns freshly loaded identity rows into an effective [`Actor`]. Head of
//! department is a relationship, not a stored role: a faculty member is HOD
//! exactly while their department's `hod_id` points at them. Classification
//! therefore runs on every request and is never cached, so reassigning the
//! HOD changes what the next call is allowed to do without any re-login.

use crate::contract::{Actor, Department, Faculty};

/// Classify a faculty member against their department
pub fn classify(faculty: Faculty, department: Department) -> Actor {
    if department.hod_id == Some(faculty.id) {
        Actor::HeadOfDepartment {
            faculty,
            department,
        }
    } else {
        Actor::Faculty { faculty }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn faculty(id: i32, department_id: i32) -> Faculty {
        Faculty {
            id,
            name: format!("Faculty {}", id),
            email: format!("faculty{}@uni.edu", id),
            department_id,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_hod_when_department_points_at_faculty() {
        let dept = Department {
            id: 7,
            name: "Physics".to_string(),
            hod_id: Some(42),
        };

        let actor = classify(faculty(42, 7), dept.clone());
        assert!(matches!(actor, Actor::HeadOfDepartment { .. }));
        assert_eq!(actor.faculty_id(), Some(42));
        assert_eq!(actor.administered_department_id(), Some(7));
    }

    #[test]
    fn test_plain_faculty_when_hod_is_someone_else() {
        let dept = Department {
            id: 7,
            name: "Physics".to_string(),
            hod_id: Some(99),
        };

        let actor = classify(faculty(42, 7), dept);
        assert!(matches!(actor, Actor::Faculty { .. }));
        assert_eq!(actor.administered_department_id(), None);
    }

    #[test]
    fn test_plain_faculty_when_department_has_no_hod() {
        let dept = Department {
            id: 7,
            name: "Physics".to_string(),
            hod_id: None,
        };

        let actor = classify(faculty(42, 7), dept);
        assert!(matches!(actor, Actor::Faculty { .. }));
    }

    #[test]
    fn test_reassignment_flips_classification() {
        let fac = faculty(42, 7);
        let before = Department {
            id: 7,
            name: "Physics".to_string(),
            hod_id: Some(42),
        };
        let after = Department {
            hod_id: Some(43),
            ..before.clone()
        };

        assert!(matches!(
            classify(fac.clone(), before),
            Actor::HeadOfDepartment { .. }
        ));
        assert!(matches!(classify(fac, after), Actor::Faculty { .. }));
    }
}
