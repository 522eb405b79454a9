//! Storage layer - database entities and repositories

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;

use crate::domain::repository::Stores;
use migrations::Migrator;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Open a database connection and bring the schema up to date
pub async fn connect(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(database_url).await?;
    Migrator::up(&db, None).await?;
    tracing::info!("academics service migrations completed");
    Ok(db)
}

/// Build the repository bundle over one shared connection
pub fn build_stores(db: Arc<DatabaseConnection>) -> Stores {
    Stores {
        super_admins: Arc::new(repositories::SeaOrmSuperAdminRepository::new(db.clone())),
        departments: Arc::new(repositories::SeaOrmDepartmentRepository::new(db.clone())),
        faculty: Arc::new(repositories::SeaOrmFacultyRepository::new(db.clone())),
        programmes: Arc::new(repositories::SeaOrmProgrammeRepository::new(db.clone())),
        courses: Arc::new(repositories::SeaOrmCourseRepository::new(db.clone())),
        syllabus: Arc::new(repositories::SeaOrmSyllabusRepository::new(db.clone())),
        questions: Arc::new(repositories::SeaOrmQuestionRepository::new(db.clone())),
        offerings: Arc::new(repositories::SeaOrmOfferingRepository::new(db.clone())),
        templates: Arc::new(repositories::SeaOrmTemplateRepository::new(db.clone())),
        papers: Arc::new(repositories::SeaOrmPaperRepository::new(db)),
    }
}
