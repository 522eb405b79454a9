//! SeaORM repository implementations
//!
//! Semantic uniqueness (offering per programme/course pair, template per
//! course) is checked inside a transaction before the insert; the UNIQUE
//! index backs the check up, so a concurrent second writer trips the index
//! and is mapped to the same store error as the checked path. Cascade
//! deletes lean on the ON DELETE CASCADE foreign keys set up in the
//! migrations.

use crate::contract::{
    Course, CourseOutcome, Department, Faculty, GeneratedPaper, NewQuestion, NewTopic, Offering,
    Programme, Question, SuperAdmin, Template, Topic,
};
use crate::domain::repository::{
    CourseRepository, DepartmentRepository, FacultyRepository, NewFacultyRecord, NewPaperRecord,
    NewTemplateRecord, OfferingRepository, PaperRepository, ProgrammeRepository,
    QuestionRepository, StoreError, StoreResult, SuperAdminRepository, SyllabusRepository,
    TemplateRepository,
};
use async_trait::async_trait;
use sea_orm::{
    prelude::Expr,
    ActiveValue::{Set, Unchanged},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, SqlErr,
    TransactionTrait,
};
use std::collections::HashMap;
use std::sync::Arc;

use super::{entity, mapper};

fn backend(err: DbErr) -> StoreError {
    StoreError::Backend(err.into())
}

/// Map a unique index trip to the duplicate-field variant
fn unique_or_backend(err: DbErr, field: &'static str, value: &str) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => StoreError::Duplicate {
            field,
            value: value.to_string(),
        },
        _ => backend(err),
    }
}

// ===== Super Admin Repository =====

pub struct SeaOrmSuperAdminRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSuperAdminRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SuperAdminRepository for SeaOrmSuperAdminRepository {
    async fn insert(&self, email: &str, password_digest: &str) -> StoreResult<SuperAdmin> {
        let active = entity::super_admin::ActiveModel {
            email: Set(email.to_string()),
            password_hash: Set(password_digest.to_string()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let result = entity::super_admin::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| unique_or_backend(e, "email", email))?;

        Ok(result.into())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<SuperAdmin>> {
        let result = entity::super_admin::Entity::find()
            .filter(entity::super_admin::Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(backend)?;

        Ok(result.map(|e| e.into()))
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<SuperAdmin>> {
        let result = entity::super_admin::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(backend)?;

        Ok(result.map(|e| e.into()))
    }

    async fn digest_by_id(&self, id: i32) -> StoreResult<Option<String>> {
        let result = entity::super_admin::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(backend)?;

        Ok(result.map(|e| e.password_hash))
    }
}

// ===== Department Repository =====

pub struct SeaOrmDepartmentRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmDepartmentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DepartmentRepository for SeaOrmDepartmentRepository {
    async fn insert(&self, name: &str) -> StoreResult<Department> {
        let active = entity::department::ActiveModel {
            name: Set(name.to_string()),
            hod_id: Set(None),
            ..Default::default()
        };

        let result = entity::department::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| unique_or_backend(e, "department name", name))?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Department>> {
        let result = entity::department::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(backend)?;

        Ok(result.map(|e| e.into()))
    }

    async fn list_all(&self) -> StoreResult<Vec<Department>> {
        let results = entity::department::Entity::find()
            .order_by_asc(entity::department::Column::Name)
            .all(&*self.db)
            .await
            .map_err(backend)?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn set_hod(
        &self,
        department_id: i32,
        faculty_id: Option<i32>,
    ) -> StoreResult<Department> {
        let active = entity::department::ActiveModel {
            id: Unchanged(department_id),
            hod_id: Set(faculty_id),
            ..Default::default()
        };

        let result = entity::department::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(backend)?;

        Ok(result.into())
    }

    async fn delete_cascade(&self, id: i32) -> StoreResult<()> {
        entity::department::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(backend)?;

        Ok(())
    }
}

// ===== Faculty Repository =====

pub struct SeaOrmFacultyRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmFacultyRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FacultyRepository for SeaOrmFacultyRepository {
    async fn insert(&self, record: &NewFacultyRecord) -> StoreResult<Faculty> {
        let active = entity::faculty::ActiveModel {
            name: Set(record.name.clone()),
            email: Set(record.email.clone()),
            password_hash: Set(record.password_digest.clone()),
            department_id: Set(record.department_id),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let result = entity::faculty::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| unique_or_backend(e, "email", &record.email))?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Faculty>> {
        let result = entity::faculty::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(backend)?;

        Ok(result.map(|e| e.into()))
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Faculty>> {
        let result = entity::faculty::Entity::find()
            .filter(entity::faculty::Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(backend)?;

        Ok(result.map(|e| e.into()))
    }

    async fn digest_by_id(&self, id: i32) -> StoreResult<Option<String>> {
        let result = entity::faculty::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(backend)?;

        Ok(result.map(|e| e.password_hash))
    }

    async fn list_by_department(&self, department_id: i32) -> StoreResult<Vec<Faculty>> {
        let results = entity::faculty::Entity::find()
            .filter(entity::faculty::Column::DepartmentId.eq(department_id))
            .order_by_asc(entity::faculty::Column::Name)
            .all(&*self.db)
            .await
            .map_err(backend)?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let txn = self.db.begin().await.map_err(backend)?;

        // Clear any headship held by the departing member; their offerings
        // go via the foreign key cascade, their generated papers stay
        entity::department::Entity::update_many()
            .col_expr(
                entity::department::Column::HodId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::department::Column::HodId.eq(id))
            .exec(&txn)
            .await
            .map_err(backend)?;

        entity::faculty::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(backend)?;

        txn.commit().await.map_err(backend)?;
        Ok(())
    }
}

// ===== Programme Repository =====

pub struct SeaOrmProgrammeRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmProgrammeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProgrammeRepository for SeaOrmProgrammeRepository {
    async fn insert(&self, name: &str, department_id: i32) -> StoreResult<Programme> {
        let active = entity::programme::ActiveModel {
            name: Set(name.to_string()),
            department_id: Set(department_id),
            ..Default::default()
        };

        let result = entity::programme::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(backend)?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Programme>> {
        let result = entity::programme::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(backend)?;

        Ok(result.map(|e| e.into()))
    }

    async fn list_by_department(&self, department_id: i32) -> StoreResult<Vec<Programme>> {
        let results = entity::programme::Entity::find()
            .filter(entity::programme::Column::DepartmentId.eq(department_id))
            .order_by_asc(entity::programme::Column::Name)
            .all(&*self.db)
            .await
            .map_err(backend)?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn delete_cascade(&self, id: i32) -> StoreResult<()> {
        entity::programme::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(backend)?;

        Ok(())
    }
}

// ===== Course Repository =====

pub struct SeaOrmCourseRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCourseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseRepository for SeaOrmCourseRepository {
    async fn insert(
        &self,
        code: &str,
        title: &str,
        home_department_id: i32,
    ) -> StoreResult<Course> {
        let active = entity::course::ActiveModel {
            code: Set(code.to_string()),
            title: Set(title.to_string()),
            home_department_id: Set(home_department_id),
            ..Default::default()
        };

        let result = entity::course::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| unique_or_backend(e, "course code", code))?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Course>> {
        let result = entity::course::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(backend)?;

        Ok(result.map(|e| e.into()))
    }

    async fn list_all(&self) -> StoreResult<Vec<Course>> {
        let results = entity::course::Entity::find()
            .order_by_asc(entity::course::Column::Code)
            .all(&*self.db)
            .await
            .map_err(backend)?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn list_by_department(&self, department_id: i32) -> StoreResult<Vec<Course>> {
        let results = entity::course::Entity::find()
            .filter(entity::course::Column::HomeDepartmentId.eq(department_id))
            .order_by_asc(entity::course::Column::Code)
            .all(&*self.db)
            .await
            .map_err(backend)?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn list_by_ids(&self, ids: &[i32]) -> StoreResult<Vec<Course>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = entity::course::Entity::find()
            .filter(entity::course::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::course::Column::Code)
            .all(&*self.db)
            .await
            .map_err(backend)?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn delete_cascade(&self, id: i32) -> StoreResult<()> {
        entity::course::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(backend)?;

        Ok(())
    }
}

// ===== Syllabus Repository =====

pub struct SeaOrmSyllabusRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSyllabusRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SyllabusRepository for SeaOrmSyllabusRepository {
    async fn insert_outcome(
        &self,
        course_id: i32,
        code: &str,
        description: &str,
    ) -> StoreResult<CourseOutcome> {
        let active = entity::course_outcome::ActiveModel {
            code: Set(code.to_string()),
            description: Set(description.to_string()),
            course_id: Set(course_id),
            ..Default::default()
        };

        let result = entity::course_outcome::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| unique_or_backend(e, "outcome code", code))?;

        Ok(result.into())
    }

    async fn find_outcome(&self, id: i32) -> StoreResult<Option<CourseOutcome>> {
        let result = entity::course_outcome::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(backend)?;

        Ok(result.map(|e| e.into()))
    }

    async fn list_outcomes(&self, course_id: i32) -> StoreResult<Vec<CourseOutcome>> {
        let results = entity::course_outcome::Entity::find()
            .filter(entity::course_outcome::Column::CourseId.eq(course_id))
            .order_by_asc(entity::course_outcome::Column::Code)
            .all(&*self.db)
            .await
            .map_err(backend)?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn insert_topic(&self, new_topic: &NewTopic) -> StoreResult<Topic> {
        let active = entity::topic::ActiveModel {
            code: Set(new_topic.code.clone()),
            title: Set(new_topic.title.clone()),
            parent_topic_id: Set(new_topic.parent_topic_id),
            course_id: Set(new_topic.course_id),
            co_id: Set(new_topic.co_id),
            ..Default::default()
        };

        let result = entity::topic::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(backend)?;

        Ok(result.into())
    }

    async fn find_topic(&self, id: i32) -> StoreResult<Option<Topic>> {
        let result = entity::topic::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(backend)?;

        Ok(result.map(|e| e.into()))
    }

    async fn list_topics(&self, course_id: i32) -> StoreResult<Vec<Topic>> {
        let results = entity::topic::Entity::find()
            .filter(entity::topic::Column::CourseId.eq(course_id))
            .order_by_asc(entity::topic::Column::Id)
            .all(&*self.db)
            .await
            .map_err(backend)?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn set_topic_parent(
        &self,
        topic_id: i32,
        parent_topic_id: Option<i32>,
    ) -> StoreResult<Topic> {
        let active = entity::topic::ActiveModel {
            id: Unchanged(topic_id),
            parent_topic_id: Set(parent_topic_id),
            ..Default::default()
        };

        let result = entity::topic::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(backend)?;

        Ok(result.into())
    }
}

// ===== Question Repository =====

pub struct SeaOrmQuestionRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmQuestionRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl QuestionRepository for SeaOrmQuestionRepository {
    async fn insert(&self, new_question: &NewQuestion) -> StoreResult<Question> {
        let active = entity::question::ActiveModel {
            course_id: Set(new_question.course_id),
            topic_id: Set(new_question.topic_id),
            text: Set(new_question.text.clone()),
            mark_value: Set(new_question.mark_value),
            bloom_level: Set(new_question.bloom_level.clone()),
            difficulty: Set(new_question.difficulty),
            active: Set(true),
            ..Default::default()
        };

        let result = entity::question::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(backend)?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Question>> {
        let result = entity::question::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(backend)?;

        Ok(result.map(|e| e.into()))
    }

    async fn list_by_course(
        &self,
        course_id: i32,
        active_only: bool,
    ) -> StoreResult<Vec<Question>> {
        let mut query = entity::question::Entity::find()
            .filter(entity::question::Column::CourseId.eq(course_id));

        if active_only {
            query = query.filter(entity::question::Column::Active.eq(true));
        }

        let results = query
            .order_by_asc(entity::question::Column::Id)
            .all(&*self.db)
            .await
            .map_err(backend)?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn set_active(&self, id: i32, active: bool) -> StoreResult<Question> {
        let model = entity::question::ActiveModel {
            id: Unchanged(id),
            active: Set(active),
            ..Default::default()
        };

        let result = entity::question::Entity::update(model)
            .exec(&*self.db)
            .await
            .map_err(backend)?;

        Ok(result.into())
    }
}

// ===== Offering Repository =====

pub struct SeaOrmOfferingRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmOfferingRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OfferingRepository for SeaOrmOfferingRepository {
    async fn insert_unique(
        &self,
        programme_id: i32,
        course_id: i32,
        semester_no: i32,
        faculty_id: i32,
    ) -> StoreResult<Offering> {
        let txn = self.db.begin().await.map_err(backend)?;

        let existing = entity::offering::Entity::find()
            .filter(entity::offering::Column::ProgrammeId.eq(programme_id))
            .filter(entity::offering::Column::CourseId.eq(course_id))
            .one(&txn)
            .await
            .map_err(backend)?;
        if existing.is_some() {
            return Err(StoreError::DuplicateOffering {
                programme_id,
                course_id,
            });
        }

        let active = entity::offering::ActiveModel {
            programme_id: Set(programme_id),
            course_id: Set(course_id),
            semester_no: Set(semester_no),
            faculty_id: Set(faculty_id),
            ..Default::default()
        };

        let result = entity::offering::Entity::insert(active)
            .exec_with_returning(&txn)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => StoreError::DuplicateOffering {
                    programme_id,
                    course_id,
                },
                _ => backend(e),
            })?;

        txn.commit().await.map_err(backend)?;
        Ok(result.into())
    }

    async fn list_by_programme(&self, programme_id: i32) -> StoreResult<Vec<Offering>> {
        let results = entity::offering::Entity::find()
            .filter(entity::offering::Column::ProgrammeId.eq(programme_id))
            .order_by_asc(entity::offering::Column::SemesterNo)
            .order_by_asc(entity::offering::Column::Id)
            .all(&*self.db)
            .await
            .map_err(backend)?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn list_by_course(&self, course_id: i32) -> StoreResult<Vec<Offering>> {
        let results = entity::offering::Entity::find()
            .filter(entity::offering::Column::CourseId.eq(course_id))
            .order_by_asc(entity::offering::Column::Id)
            .all(&*self.db)
            .await
            .map_err(backend)?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn list_by_faculty(&self, faculty_id: i32) -> StoreResult<Vec<Offering>> {
        let results = entity::offering::Entity::find()
            .filter(entity::offering::Column::FacultyId.eq(faculty_id))
            .order_by_asc(entity::offering::Column::Id)
            .all(&*self.db)
            .await
            .map_err(backend)?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }
}

// ===== Template Repository =====

pub struct SeaOrmTemplateRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmTemplateRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TemplateRepository for SeaOrmTemplateRepository {
    async fn insert_unique(&self, record: &NewTemplateRecord) -> StoreResult<Template> {
        let categories = mapper::sections_to_json(&record.sections)?;

        let txn = self.db.begin().await.map_err(backend)?;

        let existing = entity::template::Entity::find()
            .filter(entity::template::Column::CourseId.eq(record.course_id))
            .one(&txn)
            .await
            .map_err(backend)?;
        if existing.is_some() {
            return Err(StoreError::DuplicateTemplate {
                course_id: record.course_id,
            });
        }

        let active = entity::template::ActiveModel {
            course_id: Set(record.course_id),
            duration_minutes: Set(record.duration_minutes),
            total_marks: Set(record.total_marks),
            categories: Set(categories),
            bloom_distribution: Set(None),
            ..Default::default()
        };

        let result = entity::template::Entity::insert(active)
            .exec_with_returning(&txn)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => StoreError::DuplicateTemplate {
                    course_id: record.course_id,
                },
                _ => backend(e),
            })?;

        txn.commit().await.map_err(backend)?;
        Ok(result.try_into()?)
    }

    async fn find_by_course(&self, course_id: i32) -> StoreResult<Option<Template>> {
        let result = entity::template::Entity::find()
            .filter(entity::template::Column::CourseId.eq(course_id))
            .one(&*self.db)
            .await
            .map_err(backend)?;

        match result {
            Some(model) => Ok(Some(model.try_into()?)),
            None => Ok(None),
        }
    }
}

// ===== Paper Repository =====

pub struct SeaOrmPaperRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmPaperRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaperRepository for SeaOrmPaperRepository {
    async fn insert(&self, record: &NewPaperRecord) -> StoreResult<GeneratedPaper> {
        let snapshot = mapper::weightages_to_json(&record.co_weightages)?;

        let txn = self.db.begin().await.map_err(backend)?;

        let paper = entity::generated_paper::Entity::insert(
            entity::generated_paper::ActiveModel {
                course_id: Set(record.course_id),
                template_id: Set(record.template_id),
                total_marks: Set(record.total_marks),
                duration_minutes: Set(record.duration_minutes),
                created_at: Set(chrono::Utc::now()),
                generated_by: Set(record.generated_by),
                co_weightages_snapshot: Set(snapshot),
                ..Default::default()
            },
        )
        .exec_with_returning(&txn)
        .await
        .map_err(backend)?;

        for placement in &record.questions {
            let row = entity::generated_paper_question::ActiveModel {
                paper_id: Set(paper.id),
                question_id: Set(placement.question_id),
                order: Set(placement.order),
                mark_value: Set(placement.mark_value),
                section_label: Set(placement.section_label.clone()),
                co_satisfied: Set(placement.co_satisfied.clone()),
                ..Default::default()
            };
            entity::generated_paper_question::Entity::insert(row)
                .exec(&txn)
                .await
                .map_err(backend)?;
        }

        txn.commit().await.map_err(backend)?;

        Ok(GeneratedPaper {
            id: paper.id,
            course_id: paper.course_id,
            template_id: paper.template_id,
            total_marks: paper.total_marks,
            duration_minutes: paper.duration_minutes,
            created_at: paper.created_at,
            generated_by: paper.generated_by,
            co_weightages: record.co_weightages.clone(),
            questions: record.questions.clone(),
        })
    }

    async fn list_by_course(&self, course_id: i32) -> StoreResult<Vec<GeneratedPaper>> {
        let papers = entity::generated_paper::Entity::find()
            .filter(entity::generated_paper::Column::CourseId.eq(course_id))
            .order_by_desc(entity::generated_paper::Column::CreatedAt)
            .order_by_desc(entity::generated_paper::Column::Id)
            .all(&*self.db)
            .await
            .map_err(backend)?;

        if papers.is_empty() {
            return Ok(Vec::new());
        }

        let paper_ids: Vec<i32> = papers.iter().map(|p| p.id).collect();
        let rows = entity::generated_paper_question::Entity::find()
            .filter(entity::generated_paper_question::Column::PaperId.is_in(paper_ids))
            .all(&*self.db)
            .await
            .map_err(backend)?;

        let mut by_paper: HashMap<i32, Vec<entity::generated_paper_question::Model>> =
            HashMap::new();
        for row in rows {
            by_paper.entry(row.paper_id).or_default().push(row);
        }

        papers
            .into_iter()
            .map(|paper| {
                let rows = by_paper.remove(&paper.id).unwrap_or_default();
                Ok(mapper::paper_from_rows(paper, rows)?)
            })
            .collect()
    }
}
