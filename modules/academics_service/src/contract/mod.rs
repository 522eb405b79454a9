//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::AcademicsApi;
pub use error::AcademicsError;
pub use model::{
    Actor, Course, CourseOutcome, Department, Faculty, GeneratedPaper, NewFaculty, NewQuestion,
    NewTopic, Offering, PaperQuestion, Principal, Programme, Question, RoleTag, SectionSpec,
    SuperAdmin, Template, Topic,
};
