//! Field and template validation
//!
//! Pure checks shared by all write operations. Inputs arrive trimmed from
//! the transport layer but emails and course codes are normalized again
//! here so stored values are canonical regardless of the caller.

use crate::contract::{AcademicsError, SectionSpec};

/// Canonical form of an email address: trimmed and lowercased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Canonical form of a course code: trimmed and uppercased
pub fn normalize_course_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Validate an email address
///
/// Deliberately light: one '@' with something on both sides and no
/// whitespace. Deliverability is not this service's concern.
pub fn validate_email(email: &str) -> Result<(), AcademicsError> {
    if email.is_empty() {
        return Err(AcademicsError::Validation {
            message: "email cannot be empty".to_string(),
        });
    }

    if email.chars().any(char::is_whitespace) {
        return Err(AcademicsError::Validation {
            message: format!("email '{}' must not contain whitespace", email),
        });
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() {
        return Err(AcademicsError::Validation {
            message: format!("email '{}' is not a valid address", email),
        });
    }

    Ok(())
}

/// Validate a human-readable name (department, faculty, programme, title)
pub fn validate_name(field: &str, value: &str) -> Result<(), AcademicsError> {
    if value.trim().is_empty() {
        return Err(AcademicsError::Validation {
            message: format!("{} cannot be empty", field),
        });
    }
    Ok(())
}

/// Validate a course code after normalization
pub fn validate_course_code(code: &str) -> Result<(), AcademicsError> {
    if code.is_empty() {
        return Err(AcademicsError::Validation {
            message: "course code cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Validate a raw password against the configured minimum length
pub fn validate_password(password: &str, min_length: usize) -> Result<(), AcademicsError> {
    if password.chars().count() < min_length {
        return Err(AcademicsError::Validation {
            message: format!("password must be at least {} characters", min_length),
        });
    }
    Ok(())
}

/// Validate a semester number against the closed range 1..=8
pub fn validate_semester(semester_no: i32) -> Result<(), AcademicsError> {
    match semester_no {
        1..=8 => Ok(()),
        _ => Err(AcademicsError::InvalidSemester { semester_no }),
    }
}

/// Validate a question's fields
pub fn validate_question_fields(
    text: &str,
    mark_value: i32,
    bloom_level: &str,
) -> Result<(), AcademicsError> {
    validate_name("question text", text)?;
    validate_name("bloom level", bloom_level)?;

    if mark_value < 1 {
        return Err(AcademicsError::Validation {
            message: format!("mark value must be positive, got {}", mark_value),
        });
    }

    Ok(())
}

/// Validate a template definition
///
/// Order matters: an empty section list is its own error even though its
/// subtotal of zero would also fail the mark arithmetic. The subtotal is
/// accumulated in i64 so pathological section values cannot overflow.
pub fn validate_template(
    duration_minutes: i32,
    total_marks: i32,
    sections: &[SectionSpec],
) -> Result<(), AcademicsError> {
    if sections.is_empty() {
        return Err(AcademicsError::EmptySections);
    }

    if duration_minutes < 1 {
        return Err(AcademicsError::Validation {
            message: format!("duration must be positive, got {} minutes", duration_minutes),
        });
    }

    for (idx, section) in sections.iter().enumerate() {
        if section.label.trim().is_empty() {
            return Err(AcademicsError::Validation {
                message: format!("section {} has an empty label", idx + 1),
            });
        }
        if section.question_type.trim().is_empty() {
            return Err(AcademicsError::Validation {
                message: format!("section '{}' has an empty question type", section.label),
            });
        }
        if section.mark_per_question < 1 {
            return Err(AcademicsError::Validation {
                message: format!(
                    "section '{}' has non-positive mark per question",
                    section.label
                ),
            });
        }
        if section.number_of_questions < 1 {
            return Err(AcademicsError::Validation {
                message: format!(
                    "section '{}' has non-positive question count",
                    section.label
                ),
            });
        }
    }

    let calculated: i64 = sections.iter().map(SectionSpec::subtotal).sum();
    if calculated != i64::from(total_marks) {
        return Err(AcademicsError::MarkMismatch {
            declared: total_marks,
            calculated,
        });
    }

    Ok(())
}
