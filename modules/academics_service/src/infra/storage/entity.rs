//! SeaORM entities for database tables
//!
//! One module per table. Head-of-department status lives only on the
//! department row (`hod_id`); the faculty table has no role column. The
//! `hod_id` and `generated_by` columns are plain integers without foreign
//! keys: the first because the reference is circular, the second so paper
//! history survives faculty removal.

/// Super admin accounts module
pub mod super_admin {
    use sea_orm::entity::prelude::*;

    /// Super admin table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "tbl_superadmins")]
    pub struct Model {
        /// Primary key
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Canonical (trimmed, lowercased) email, unique
        pub email: String,

        /// Argon2 PHC digest
        pub password_hash: String,

        /// Creation timestamp
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Departments module
pub mod department {
    use sea_orm::entity::prelude::*;

    /// Department table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "tbl_departments")]
    pub struct Model {
        /// Primary key
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Department name, unique
        pub name: String,

        /// Faculty currently acting as head of department (no FK)
        pub hod_id: Option<i32>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Faculty roster of this department
        #[sea_orm(has_many = "super::faculty::Entity")]
        Faculty,

        /// Programmes run by this department
        #[sea_orm(has_many = "super::programme::Entity")]
        Programmes,

        /// Courses owned by this department
        #[sea_orm(has_many = "super::course::Entity")]
        Courses,
    }

    impl Related<super::faculty::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Faculty.def()
        }
    }

    impl Related<super::programme::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Programmes.def()
        }
    }

    impl Related<super::course::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Courses.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Faculty accounts module
pub mod faculty {
    use sea_orm::entity::prelude::*;

    /// Faculty table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "tbl_faculty")]
    pub struct Model {
        /// Primary key
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Display name
        pub name: String,

        /// Canonical (trimmed, lowercased) email, unique
        pub email: String,

        /// Argon2 PHC digest
        pub password_hash: String,

        /// Department this faculty member belongs to
        pub department_id: i32,

        /// Creation timestamp
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to departments
        #[sea_orm(
            belongs_to = "super::department::Entity",
            from = "Column::DepartmentId",
            to = "super::department::Column::Id"
        )]
        Department,

        /// Teaching assignments of this faculty member
        #[sea_orm(has_many = "super::offering::Entity")]
        Offerings,
    }

    impl Related<super::department::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Department.def()
        }
    }

    impl Related<super::offering::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Offerings.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Programmes module
pub mod programme {
    use sea_orm::entity::prelude::*;

    /// Programme table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "tbl_programmes")]
    pub struct Model {
        /// Primary key
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Programme name
        pub name: String,

        /// Department running the programme
        pub department_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to departments
        #[sea_orm(
            belongs_to = "super::department::Entity",
            from = "Column::DepartmentId",
            to = "super::department::Column::Id"
        )]
        Department,

        /// Curriculum entries of this programme
        #[sea_orm(has_many = "super::offering::Entity")]
        Offerings,
    }

    impl Related<super::department::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Department.def()
        }
    }

    impl Related<super::offering::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Offerings.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Course catalogue module
pub mod course {
    use sea_orm::entity::prelude::*;

    /// Course table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "tbl_courses")]
    pub struct Model {
        /// Primary key
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Canonical (trimmed, uppercased) course code, unique
        pub code: String,

        /// Course title
        pub title: String,

        /// Owning department
        pub home_department_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to departments
        #[sea_orm(
            belongs_to = "super::department::Entity",
            from = "Column::HomeDepartmentId",
            to = "super::department::Column::Id"
        )]
        HomeDepartment,

        /// Outcomes declared for this course
        #[sea_orm(has_many = "super::course_outcome::Entity")]
        Outcomes,

        /// Syllabus topics of this course
        #[sea_orm(has_many = "super::topic::Entity")]
        Topics,

        /// Question bank of this course
        #[sea_orm(has_many = "super::question::Entity")]
        Questions,

        /// Programme curricula featuring this course
        #[sea_orm(has_many = "super::offering::Entity")]
        Offerings,

        /// The single exam template (UNIQUE on course_id)
        #[sea_orm(has_many = "super::template::Entity")]
        Template,

        /// Papers generated for this course
        #[sea_orm(has_many = "super::generated_paper::Entity")]
        Papers,
    }

    impl Related<super::department::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::HomeDepartment.def()
        }
    }

    impl Related<super::course_outcome::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Outcomes.def()
        }
    }

    impl Related<super::topic::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Topics.def()
        }
    }

    impl Related<super::question::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Questions.def()
        }
    }

    impl Related<super::template::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Template.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Course outcomes module
pub mod course_outcome {
    use sea_orm::entity::prelude::*;

    /// Course outcome table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "tbl_course_outcomes")]
    pub struct Model {
        /// Primary key
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Outcome code (CO1, CO2, ...), unique within the course
        pub code: String,

        /// Outcome description
        pub description: String,

        /// Course this outcome belongs to
        pub course_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to courses
        #[sea_orm(
            belongs_to = "super::course::Entity",
            from = "Column::CourseId",
            to = "super::course::Column::Id"
        )]
        Course,

        /// Topics serving this outcome
        #[sea_orm(has_many = "super::topic::Entity")]
        Topics,
    }

    impl Related<super::course::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Course.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Syllabus topics module
pub mod topic {
    use sea_orm::entity::prelude::*;

    /// Topic table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "tbl_topics")]
    pub struct Model {
        /// Primary key
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Display code such as "1.1"
        pub code: Option<String>,

        /// Topic title
        pub title: String,

        /// Parent topic for nested topics (self reference)
        pub parent_topic_id: Option<i32>,

        /// Course this topic belongs to
        pub course_id: i32,

        /// Course outcome this topic serves
        pub co_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to courses
        #[sea_orm(
            belongs_to = "super::course::Entity",
            from = "Column::CourseId",
            to = "super::course::Column::Id"
        )]
        Course,

        /// Foreign key to course outcomes
        #[sea_orm(
            belongs_to = "super::course_outcome::Entity",
            from = "Column::CoId",
            to = "super::course_outcome::Column::Id"
        )]
        Outcome,

        /// Self reference to the parent topic
        #[sea_orm(
            belongs_to = "Entity",
            from = "Column::ParentTopicId",
            to = "Column::Id"
        )]
        Parent,

        /// Questions filed under this topic
        #[sea_orm(has_many = "super::question::Entity")]
        Questions,
    }

    impl Related<super::course::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Course.def()
        }
    }

    impl Related<super::course_outcome::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Outcome.def()
        }
    }

    impl Related<super::question::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Questions.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Exam templates module
pub mod template {
    use sea_orm::entity::prelude::*;

    /// Template table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "tbl_templates")]
    pub struct Model {
        /// Primary key
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Course this template belongs to, unique
        pub course_id: i32,

        /// Exam duration in minutes
        pub duration_minutes: i32,

        /// Declared paper total
        pub total_marks: i32,

        /// Section rows as a JSON array, in definition order
        pub categories: Json,

        /// Optional bloom level percentages
        pub bloom_distribution: Option<Json>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to courses
        #[sea_orm(
            belongs_to = "super::course::Entity",
            from = "Column::CourseId",
            to = "super::course::Column::Id"
        )]
        Course,
    }

    impl Related<super::course::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Course.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Question bank module
pub mod question {
    use sea_orm::entity::prelude::*;

    /// Question table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "tbl_questions")]
    pub struct Model {
        /// Primary key
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Course this question belongs to
        pub course_id: i32,

        /// Topic the question is filed under
        pub topic_id: i32,

        /// Question text
        pub text: String,

        /// Marks the question is worth
        pub mark_value: i32,

        /// Bloom taxonomy level label
        pub bloom_level: String,

        /// Optional difficulty rating
        pub difficulty: Option<i32>,

        /// Retired questions stay referenced by old papers but leave the pool
        pub active: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to courses
        #[sea_orm(
            belongs_to = "super::course::Entity",
            from = "Column::CourseId",
            to = "super::course::Column::Id"
        )]
        Course,

        /// Foreign key to topics
        #[sea_orm(
            belongs_to = "super::topic::Entity",
            from = "Column::TopicId",
            to = "super::topic::Column::Id"
        )]
        Topic,
    }

    impl Related<super::course::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Course.def()
        }
    }

    impl Related<super::topic::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Topic.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Programme course offerings module
pub mod offering {
    use sea_orm::entity::prelude::*;

    /// Offering table entity
    ///
    /// UNIQUE over (programme_id, course_id) plus a CHECK keeping
    /// semester_no inside 1..=8 live in the migration.
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "tbl_programme_course_offerings")]
    pub struct Model {
        /// Primary key
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Programme the course is placed into
        pub programme_id: i32,

        /// Course being offered
        pub course_id: i32,

        /// Semester slot, closed range 1..=8
        pub semester_no: i32,

        /// Faculty teaching this offering
        pub faculty_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to programmes
        #[sea_orm(
            belongs_to = "super::programme::Entity",
            from = "Column::ProgrammeId",
            to = "super::programme::Column::Id"
        )]
        Programme,

        /// Foreign key to courses
        #[sea_orm(
            belongs_to = "super::course::Entity",
            from = "Column::CourseId",
            to = "super::course::Column::Id"
        )]
        Course,

        /// Foreign key to faculty
        #[sea_orm(
            belongs_to = "super::faculty::Entity",
            from = "Column::FacultyId",
            to = "super::faculty::Column::Id"
        )]
        Faculty,
    }

    impl Related<super::programme::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Programme.def()
        }
    }

    impl Related<super::course::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Course.def()
        }
    }

    impl Related<super::faculty::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Faculty.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Generated papers module
pub mod generated_paper {
    use sea_orm::entity::prelude::*;

    /// Generated paper table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "tbl_generated_papers")]
    pub struct Model {
        /// Primary key
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Course the paper was generated for
        pub course_id: i32,

        /// Template the paper was generated from
        pub template_id: i32,

        /// Paper total, copied from the template
        pub total_marks: i32,

        /// Duration, copied from the template
        pub duration_minutes: i32,

        /// Generation timestamp
        pub created_at: DateTimeUtc,

        /// Faculty who generated the paper; NULL for super admin runs (no FK)
        pub generated_by: Option<i32>,

        /// Marks per outcome code at generation time, frozen
        pub co_weightages_snapshot: Json,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to courses
        #[sea_orm(
            belongs_to = "super::course::Entity",
            from = "Column::CourseId",
            to = "super::course::Column::Id"
        )]
        Course,

        /// Foreign key to templates
        #[sea_orm(
            belongs_to = "super::template::Entity",
            from = "Column::TemplateId",
            to = "super::template::Column::Id"
        )]
        Template,

        /// Question placements of this paper
        #[sea_orm(has_many = "super::generated_paper_question::Entity")]
        Questions,
    }

    impl Related<super::course::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Course.def()
        }
    }

    impl Related<super::template::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Template.def()
        }
    }

    impl Related<super::generated_paper_question::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Questions.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Generated paper question placements module
pub mod generated_paper_question {
    use sea_orm::entity::prelude::*;

    /// Paper question placement table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "tbl_generated_paper_questions")]
    pub struct Model {
        /// Primary key
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Paper this placement belongs to
        pub paper_id: i32,

        /// Question placed into the paper
        pub question_id: i32,

        /// Position within the paper, numbered 1..n across all sections
        pub order: i32,

        /// Marks at placement time
        pub mark_value: i32,

        /// Section heading the question was placed under
        pub section_label: Option<String>,

        /// Outcome code the question counts towards
        pub co_satisfied: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to generated papers
        #[sea_orm(
            belongs_to = "super::generated_paper::Entity",
            from = "Column::PaperId",
            to = "super::generated_paper::Column::Id"
        )]
        Paper,

        /// Foreign key to questions
        #[sea_orm(
            belongs_to = "super::question::Entity",
            from = "Column::QuestionId",
            to = "super::question::Column::Id"
        )]
        Question,
    }

    impl Related<super::generated_paper::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Paper.def()
        }
    }

    impl Related<super::question::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Question.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
