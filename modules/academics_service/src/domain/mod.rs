//! Domain layer - business logic and services

pub mod credentials;
pub mod events;
pub mod hierarchy;
pub mod identity;
pub mod paper;
pub mod policy;
pub mod repository;
pub mod service;
pub mod validation;

pub use credentials::{Argon2Credentials, CredentialVerifier};
pub use events::{AcademicsEvent, EventPublisher, NoOpEventPublisher, TracingEventPublisher};
pub use policy::{Action, CourseScope, Decision, Resource};
pub use repository::{
    CourseRepository, DepartmentRepository, FacultyRepository, OfferingRepository,
    PaperRepository, ProgrammeRepository, QuestionRepository, Stores, SuperAdminRepository,
    SyllabusRepository, TemplateRepository,
};
pub use service::Service;
