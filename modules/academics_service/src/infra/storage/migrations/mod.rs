//! Database migrations for academics service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_identity::Migration),
            Box::new(m20250301_000002_create_catalogue::Migration),
            Box::new(m20250301_000003_create_syllabus::Migration),
            Box::new(m20250301_000004_create_curriculum::Migration),
            Box::new(m20250301_000005_create_papers::Migration),
        ]
    }
}

mod m20250301_000001_create_identity {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SuperAdmins::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SuperAdmins::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(SuperAdmins::Email)
                                .string_len(255)
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(SuperAdmins::PasswordHash)
                                .string_len(255)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SuperAdmins::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Departments::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Departments::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Departments::Name)
                                .string_len(128)
                                .not_null()
                                .unique_key(),
                        )
                        // Plain column: the reference into tbl_faculty is
                        // circular, same-department membership is enforced
                        // in the domain layer
                        .col(ColumnDef::new(Departments::HodId).integer())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Faculty::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Faculty::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Faculty::Name).string_len(128).not_null())
                        .col(
                            ColumnDef::new(Faculty::Email)
                                .string_len(255)
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Faculty::PasswordHash)
                                .string_len(255)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Faculty::DepartmentId).integer().not_null())
                        .col(
                            ColumnDef::new(Faculty::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_faculty_department")
                                .from(Faculty::Table, Faculty::DepartmentId)
                                .to(Departments::Table, Departments::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_faculty_department")
                        .table(Faculty::Table)
                        .col(Faculty::DepartmentId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Faculty::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Departments::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(SuperAdmins::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum SuperAdmins {
        #[sea_orm(iden = "tbl_superadmins")]
        Table,
        Id,
        Email,
        PasswordHash,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum Departments {
        #[sea_orm(iden = "tbl_departments")]
        Table,
        Id,
        Name,
        HodId,
    }

    #[derive(DeriveIden)]
    enum Faculty {
        #[sea_orm(iden = "tbl_faculty")]
        Table,
        Id,
        Name,
        Email,
        PasswordHash,
        DepartmentId,
        CreatedAt,
    }
}

mod m20250301_000002_create_catalogue {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Programmes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Programmes::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Programmes::Name).string_len(128).not_null())
                        .col(
                            ColumnDef::new(Programmes::DepartmentId)
                                .integer()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_programmes_department")
                                .from(Programmes::Table, Programmes::DepartmentId)
                                .to(Departments::Table, Departments::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Courses::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Courses::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Courses::Code)
                                .string_len(64)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Courses::Title).string_len(256).not_null())
                        .col(
                            ColumnDef::new(Courses::HomeDepartmentId)
                                .integer()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_courses_home_department")
                                .from(Courses::Table, Courses::HomeDepartmentId)
                                .to(Departments::Table, Departments::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_courses_home_department")
                        .table(Courses::Table)
                        .col(Courses::HomeDepartmentId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Courses::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Programmes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Programmes {
        #[sea_orm(iden = "tbl_programmes")]
        Table,
        Id,
        Name,
        DepartmentId,
    }

    #[derive(DeriveIden)]
    enum Courses {
        #[sea_orm(iden = "tbl_courses")]
        Table,
        Id,
        Code,
        Title,
        HomeDepartmentId,
    }

    #[derive(DeriveIden)]
    enum Departments {
        #[sea_orm(iden = "tbl_departments")]
        Table,
        Id,
    }
}

mod m20250301_000003_create_syllabus {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(CourseOutcomes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(CourseOutcomes::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(CourseOutcomes::Code)
                                .string_len(32)
                                .not_null(),
                        )
                        .col(ColumnDef::new(CourseOutcomes::Description).text().not_null())
                        .col(
                            ColumnDef::new(CourseOutcomes::CourseId)
                                .integer()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_course_outcomes_course")
                                .from(CourseOutcomes::Table, CourseOutcomes::CourseId)
                                .to(Courses::Table, Courses::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("uq_course_outcome_code")
                        .table(CourseOutcomes::Table)
                        .col(CourseOutcomes::CourseId)
                        .col(CourseOutcomes::Code)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Topics::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Topics::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Topics::Code).string_len(32))
                        .col(ColumnDef::new(Topics::Title).text().not_null())
                        .col(ColumnDef::new(Topics::ParentTopicId).integer())
                        .col(ColumnDef::new(Topics::CourseId).integer().not_null())
                        .col(ColumnDef::new(Topics::CoId).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_topics_course")
                                .from(Topics::Table, Topics::CourseId)
                                .to(Courses::Table, Courses::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_topics_outcome")
                                .from(Topics::Table, Topics::CoId)
                                .to(CourseOutcomes::Table, CourseOutcomes::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_topics_parent")
                                .from(Topics::Table, Topics::ParentTopicId)
                                .to(Topics::Table, Topics::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_topics_course")
                        .table(Topics::Table)
                        .col(Topics::CourseId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Questions::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Questions::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Questions::CourseId).integer().not_null())
                        .col(ColumnDef::new(Questions::TopicId).integer().not_null())
                        .col(ColumnDef::new(Questions::Text).text().not_null())
                        .col(ColumnDef::new(Questions::MarkValue).integer().not_null())
                        .col(
                            ColumnDef::new(Questions::BloomLevel)
                                .string_len(32)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Questions::Difficulty).integer())
                        .col(
                            ColumnDef::new(Questions::Active)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_questions_course")
                                .from(Questions::Table, Questions::CourseId)
                                .to(Courses::Table, Courses::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_questions_topic")
                                .from(Questions::Table, Questions::TopicId)
                                .to(Topics::Table, Topics::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_questions_course")
                        .table(Questions::Table)
                        .col(Questions::CourseId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Questions::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Topics::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(CourseOutcomes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum CourseOutcomes {
        #[sea_orm(iden = "tbl_course_outcomes")]
        Table,
        Id,
        Code,
        Description,
        CourseId,
    }

    #[derive(DeriveIden)]
    enum Topics {
        #[sea_orm(iden = "tbl_topics")]
        Table,
        Id,
        Code,
        Title,
        ParentTopicId,
        CourseId,
        CoId,
    }

    #[derive(DeriveIden)]
    enum Questions {
        #[sea_orm(iden = "tbl_questions")]
        Table,
        Id,
        CourseId,
        TopicId,
        Text,
        MarkValue,
        BloomLevel,
        Difficulty,
        Active,
    }

    #[derive(DeriveIden)]
    enum Courses {
        #[sea_orm(iden = "tbl_courses")]
        Table,
        Id,
    }
}

mod m20250301_000004_create_curriculum {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Offerings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Offerings::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Offerings::ProgrammeId).integer().not_null())
                        .col(ColumnDef::new(Offerings::CourseId).integer().not_null())
                        .col(
                            ColumnDef::new(Offerings::SemesterNo)
                                .integer()
                                .not_null()
                                .check(Expr::col(Offerings::SemesterNo).between(1, 8)),
                        )
                        .col(ColumnDef::new(Offerings::FacultyId).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_offerings_programme")
                                .from(Offerings::Table, Offerings::ProgrammeId)
                                .to(Programmes::Table, Programmes::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_offerings_course")
                                .from(Offerings::Table, Offerings::CourseId)
                                .to(Courses::Table, Courses::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_offerings_faculty")
                                .from(Offerings::Table, Offerings::FacultyId)
                                .to(Faculty::Table, Faculty::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            // A programme offers a course at most once, in any semester
            manager
                .create_index(
                    Index::create()
                        .name("uq_programme_course_once")
                        .table(Offerings::Table)
                        .col(Offerings::ProgrammeId)
                        .col(Offerings::CourseId)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_offerings_faculty")
                        .table(Offerings::Table)
                        .col(Offerings::FacultyId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_offerings_course")
                        .table(Offerings::Table)
                        .col(Offerings::CourseId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Templates::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Templates::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        // One template per course
                        .col(
                            ColumnDef::new(Templates::CourseId)
                                .integer()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Templates::DurationMinutes)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Templates::TotalMarks).integer().not_null())
                        .col(ColumnDef::new(Templates::Categories).json().not_null())
                        .col(ColumnDef::new(Templates::BloomDistribution).json())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_templates_course")
                                .from(Templates::Table, Templates::CourseId)
                                .to(Courses::Table, Courses::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Templates::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Offerings::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Offerings {
        #[sea_orm(iden = "tbl_programme_course_offerings")]
        Table,
        Id,
        ProgrammeId,
        CourseId,
        SemesterNo,
        FacultyId,
    }

    #[derive(DeriveIden)]
    enum Templates {
        #[sea_orm(iden = "tbl_templates")]
        Table,
        Id,
        CourseId,
        DurationMinutes,
        TotalMarks,
        Categories,
        BloomDistribution,
    }

    #[derive(DeriveIden)]
    enum Programmes {
        #[sea_orm(iden = "tbl_programmes")]
        Table,
        Id,
    }

    #[derive(DeriveIden)]
    enum Courses {
        #[sea_orm(iden = "tbl_courses")]
        Table,
        Id,
    }

    #[derive(DeriveIden)]
    enum Faculty {
        #[sea_orm(iden = "tbl_faculty")]
        Table,
        Id,
    }
}

mod m20250301_000005_create_papers {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(GeneratedPapers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(GeneratedPapers::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(GeneratedPapers::CourseId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(GeneratedPapers::TemplateId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(GeneratedPapers::TotalMarks)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(GeneratedPapers::DurationMinutes)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(GeneratedPapers::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        // Plain column so paper history survives faculty
                        // removal; NULL for super admin runs
                        .col(ColumnDef::new(GeneratedPapers::GeneratedBy).integer())
                        .col(
                            ColumnDef::new(GeneratedPapers::CoWeightagesSnapshot)
                                .json()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_papers_course")
                                .from(GeneratedPapers::Table, GeneratedPapers::CourseId)
                                .to(Courses::Table, Courses::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_papers_template")
                                .from(GeneratedPapers::Table, GeneratedPapers::TemplateId)
                                .to(Templates::Table, Templates::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_papers_course")
                        .table(GeneratedPapers::Table)
                        .col(GeneratedPapers::CourseId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(PaperQuestions::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PaperQuestions::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(PaperQuestions::PaperId).integer().not_null())
                        .col(
                            ColumnDef::new(PaperQuestions::QuestionId)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(PaperQuestions::Order).integer().not_null())
                        .col(
                            ColumnDef::new(PaperQuestions::MarkValue)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(PaperQuestions::SectionLabel).string_len(64))
                        .col(ColumnDef::new(PaperQuestions::CoSatisfied).string_len(32))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_paper_questions_paper")
                                .from(PaperQuestions::Table, PaperQuestions::PaperId)
                                .to(GeneratedPapers::Table, GeneratedPapers::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_paper_questions_question")
                                .from(PaperQuestions::Table, PaperQuestions::QuestionId)
                                .to(Questions::Table, Questions::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_paper_questions_paper")
                        .table(PaperQuestions::Table)
                        .col(PaperQuestions::PaperId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PaperQuestions::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(GeneratedPapers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum GeneratedPapers {
        #[sea_orm(iden = "tbl_generated_papers")]
        Table,
        Id,
        CourseId,
        TemplateId,
        TotalMarks,
        DurationMinutes,
        CreatedAt,
        GeneratedBy,
        CoWeightagesSnapshot,
    }

    #[derive(DeriveIden)]
    enum PaperQuestions {
        #[sea_orm(iden = "tbl_generated_paper_questions")]
        Table,
        Id,
        PaperId,
        QuestionId,
        Order,
        MarkValue,
        SectionLabel,
        CoSatisfied,
    }

    #[derive(DeriveIden)]
    enum Courses {
        #[sea_orm(iden = "tbl_courses")]
        Table,
        Id,
    }

    #[derive(DeriveIden)]
    enum Templates {
        #[sea_orm(iden = "tbl_templates")]
        Table,
        Id,
    }

    #[derive(DeriveIden)]
    enum Questions {
        #[sea_orm(iden = "tbl_questions")]
        Table,
        Id,
    }
}
