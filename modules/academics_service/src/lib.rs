//! Academics Service Module
//!
//! Core of an academic administration platform: departments, faculty
//! accounts, programmes, a global course catalogue, per-course syllabi
//! (outcomes, topics, question banks), exam templates, and generated
//! papers. Access control is resolved per call - head-of-department status
//! is derived from the department row, never cached on a session.

// Public exports
pub mod contract;
pub use contract::{
    AcademicsApi, AcademicsError, Actor, Course, CourseOutcome, Department, Faculty,
    GeneratedPaper, NewFaculty, NewQuestion, NewTopic, Offering, PaperQuestion, Principal,
    Programme, Question, RoleTag, SectionSpec, SuperAdmin, Template, Topic,
};

pub use api::native::NativeClient;
pub use domain::Service;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
