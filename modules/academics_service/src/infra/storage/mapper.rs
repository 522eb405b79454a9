//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models. Password
//! digests never leave this layer: account conversions drop them, and the
//! repositories expose them only through the dedicated digest lookups.

use super::entity;
use crate::contract::{
    Course, CourseOutcome, Department, Faculty, GeneratedPaper, Offering, PaperQuestion,
    Programme, Question, SectionSpec, SuperAdmin, Template, Topic,
};
use std::collections::BTreeMap;

// ===== Account Conversions =====

impl From<entity::super_admin::Model> for SuperAdmin {
    fn from(entity: entity::super_admin::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            created_at: entity.created_at,
        }
    }
}

impl From<entity::faculty::Model> for Faculty {
    fn from(entity: entity::faculty::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            department_id: entity.department_id,
            created_at: entity.created_at,
        }
    }
}

// ===== Hierarchy Conversions =====

impl From<entity::department::Model> for Department {
    fn from(entity: entity::department::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            hod_id: entity.hod_id,
        }
    }
}

impl From<entity::programme::Model> for Programme {
    fn from(entity: entity::programme::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            department_id: entity.department_id,
        }
    }
}

impl From<entity::course::Model> for Course {
    fn from(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            title: entity.title,
            home_department_id: entity.home_department_id,
        }
    }
}

// ===== Syllabus Conversions =====

impl From<entity::course_outcome::Model> for CourseOutcome {
    fn from(entity: entity::course_outcome::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            description: entity.description,
            course_id: entity.course_id,
        }
    }
}

impl From<entity::topic::Model> for Topic {
    fn from(entity: entity::topic::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            title: entity.title,
            course_id: entity.course_id,
            co_id: entity.co_id,
            parent_topic_id: entity.parent_topic_id,
        }
    }
}

impl From<entity::question::Model> for Question {
    fn from(entity: entity::question::Model) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            topic_id: entity.topic_id,
            text: entity.text,
            mark_value: entity.mark_value,
            bloom_level: entity.bloom_level,
            difficulty: entity.difficulty,
            active: entity.active,
        }
    }
}

impl From<entity::offering::Model> for Offering {
    fn from(entity: entity::offering::Model) -> Self {
        Self {
            id: entity.id,
            programme_id: entity.programme_id,
            course_id: entity.course_id,
            semester_no: entity.semester_no,
            faculty_id: entity.faculty_id,
        }
    }
}

// ===== Template Conversions =====

impl TryFrom<entity::template::Model> for Template {
    type Error = anyhow::Error;

    fn try_from(entity: entity::template::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: entity.id,
            course_id: entity.course_id,
            duration_minutes: entity.duration_minutes,
            total_marks: entity.total_marks,
            sections: sections_from_json(entity.categories)?,
            bloom_distribution: entity.bloom_distribution,
        })
    }
}

// ===== Paper Conversions =====

/// Build a contract paper from its row and its placement rows
///
/// Placements come back in stored order; they are re-sorted on the order
/// column anyway so a paper reads the same regardless of row order.
pub fn paper_from_rows(
    paper: entity::generated_paper::Model,
    mut rows: Vec<entity::generated_paper_question::Model>,
) -> anyhow::Result<GeneratedPaper> {
    let co_weightages: BTreeMap<String, i32> =
        serde_json::from_value(paper.co_weightages_snapshot)?;

    rows.sort_by_key(|row| row.order);
    let questions = rows
        .into_iter()
        .map(|row| PaperQuestion {
            order: row.order,
            question_id: row.question_id,
            mark_value: row.mark_value,
            section_label: row.section_label,
            co_satisfied: row.co_satisfied,
        })
        .collect();

    Ok(GeneratedPaper {
        id: paper.id,
        course_id: paper.course_id,
        template_id: paper.template_id,
        total_marks: paper.total_marks,
        duration_minutes: paper.duration_minutes,
        created_at: paper.created_at,
        generated_by: paper.generated_by,
        co_weightages,
        questions,
    })
}

// ===== JSON Serialization Helpers =====

/// JSON representation of one template section for database storage
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct SectionSpecJson {
    section: String,
    question_type: String,
    mark_per_question: i32,
    number_of_questions: i32,
}

impl From<&SectionSpec> for SectionSpecJson {
    fn from(spec: &SectionSpec) -> Self {
        Self {
            section: spec.label.clone(),
            question_type: spec.question_type.clone(),
            mark_per_question: spec.mark_per_question,
            number_of_questions: spec.number_of_questions,
        }
    }
}

impl From<SectionSpecJson> for SectionSpec {
    fn from(json: SectionSpecJson) -> Self {
        Self {
            label: json.section,
            question_type: json.question_type,
            mark_per_question: json.mark_per_question,
            number_of_questions: json.number_of_questions,
        }
    }
}

/// Serialize template sections for the JSON column, preserving order
pub fn sections_to_json(sections: &[SectionSpec]) -> anyhow::Result<serde_json::Value> {
    let rows: Vec<SectionSpecJson> = sections.iter().map(SectionSpecJson::from).collect();
    Ok(serde_json::to_value(rows)?)
}

/// Deserialize template sections from the JSON column
pub fn sections_from_json(value: serde_json::Value) -> anyhow::Result<Vec<SectionSpec>> {
    let rows: Vec<SectionSpecJson> = serde_json::from_value(value)?;
    Ok(rows.into_iter().map(SectionSpec::from).collect())
}

/// Serialize the per-outcome mark snapshot for the JSON column
pub fn weightages_to_json(weightages: &BTreeMap<String, i32>) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(weightages)?)
}
