/// Domain events for academics service
///
/// Mutations that change who may do what, or that produce artefacts
/// (offerings, templates, papers), emit an audit event after the write
/// commits. Publishing is best-effort: a failed publish is logged and never
/// fails the operation that produced it.
use crate::contract::model::{GeneratedPaper, Offering, Template};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain event types for academics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum AcademicsEvent {
    /// A department got a new head
    HodAssigned(HodAssignedEvent),
    /// A course was placed into a programme's curriculum
    CourseAssigned(CourseAssignedEvent),
    /// A course received its exam template
    TemplateDefined(TemplateDefinedEvent),
    /// An exam paper was generated
    PaperGenerated(PaperGeneratedEvent),
    /// A question left the active pool
    QuestionRetired(QuestionRetiredEvent),
    /// A department and everything it owned was removed
    DepartmentDeleted(DepartmentDeletedEvent),
}

/// Event data for HOD assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HodAssignedEvent {
    pub department_id: i32,
    pub faculty_id: i32,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event data for a new course offering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseAssignedEvent {
    pub offering_id: i32,
    pub programme_id: i32,
    pub course_id: i32,
    pub semester_no: i32,
    pub faculty_id: i32,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event data for template definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDefinedEvent {
    pub template_id: i32,
    pub course_id: i32,
    pub total_marks: i32,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event data for paper generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperGeneratedEvent {
    pub paper_id: i32,
    pub course_id: i32,
    /// Faculty who generated the paper; None for super admin runs
    pub generated_by: Option<i32>,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event data for question retirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRetiredEvent {
    pub question_id: i32,
    pub course_id: i32,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event data for department removal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentDeletedEvent {
    pub department_id: i32,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

impl AcademicsEvent {
    /// Create a new HodAssigned event
    pub fn hod_assigned(department_id: i32, faculty_id: i32) -> Self {
        AcademicsEvent::HodAssigned(HodAssignedEvent {
            department_id,
            faculty_id,
            timestamp: Utc::now(),
        })
    }

    /// Create a new CourseAssigned event
    pub fn course_assigned(offering: &Offering) -> Self {
        AcademicsEvent::CourseAssigned(CourseAssignedEvent {
            offering_id: offering.id,
            programme_id: offering.programme_id,
            course_id: offering.course_id,
            semester_no: offering.semester_no,
            faculty_id: offering.faculty_id,
            timestamp: Utc::now(),
        })
    }

    /// Create a new TemplateDefined event
    pub fn template_defined(template: &Template) -> Self {
        AcademicsEvent::TemplateDefined(TemplateDefinedEvent {
            template_id: template.id,
            course_id: template.course_id,
            total_marks: template.total_marks,
            timestamp: Utc::now(),
        })
    }

    /// Create a new PaperGenerated event
    pub fn paper_generated(paper: &GeneratedPaper) -> Self {
        AcademicsEvent::PaperGenerated(PaperGeneratedEvent {
            paper_id: paper.id,
            course_id: paper.course_id,
            generated_by: paper.generated_by,
            timestamp: Utc::now(),
        })
    }

    /// Create a new QuestionRetired event
    pub fn question_retired(question_id: i32, course_id: i32) -> Self {
        AcademicsEvent::QuestionRetired(QuestionRetiredEvent {
            question_id,
            course_id,
            timestamp: Utc::now(),
        })
    }

    /// Create a new DepartmentDeleted event
    pub fn department_deleted(department_id: i32) -> Self {
        AcademicsEvent::DepartmentDeleted(DepartmentDeletedEvent {
            department_id,
            timestamp: Utc::now(),
        })
    }
}

/// Event publisher trait for publishing domain events
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish an audit event
    async fn publish(&self, event: AcademicsEvent) -> anyhow::Result<()>;
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: AcademicsEvent) -> anyhow::Result<()> {
        // No-op: events are not published
        Ok(())
    }
}

/// Publisher that emits events into the tracing stream
pub struct TracingEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: AcademicsEvent) -> anyhow::Result<()> {
        let payload = serde_json::to_string(&event)?;
        tracing::info!(target: "academics.audit", event = %payload, "audit event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_assigned_event_creation() {
        let offering = Offering {
            id: 5,
            programme_id: 2,
            course_id: 9,
            semester_no: 3,
            faculty_id: 11,
        };

        let event = AcademicsEvent::course_assigned(&offering);

        match event {
            AcademicsEvent::CourseAssigned(e) => {
                assert_eq!(e.offering_id, 5);
                assert_eq!(e.programme_id, 2);
                assert_eq!(e.course_id, 9);
                assert_eq!(e.semester_no, 3);
                assert_eq!(e.faculty_id, 11);
            }
            _ => panic!("Expected CourseAssigned event"),
        }
    }

    #[test]
    fn test_event_serialization_tag() {
        let event = AcademicsEvent::hod_assigned(7, 42);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event_type"], "hod_assigned");
        assert_eq!(json["department_id"], 7);
        assert_eq!(json["faculty_id"], 42);
    }

    #[tokio::test]
    async fn test_noop_event_publisher() {
        let publisher = NoOpEventPublisher;
        let event = AcademicsEvent::department_deleted(3);

        // Should not error
        let result = publisher.publish(event).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_tracing_event_publisher() {
        let publisher = TracingEventPublisher;
        let event = AcademicsEvent::question_retired(31, 9);

        let result = publisher.publish(event).await;
        assert!(result.is_ok());
    }
}
