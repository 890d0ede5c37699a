use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000002_create_training_table::Training,
    m20250603_000008_create_course_table::Course,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainingCourse::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainingCourse::Id))
                    .col(integer(TrainingCourse::TrainingId))
                    .col(integer(TrainingCourse::CourseId))
                    .col(
                        timestamp_with_time_zone(TrainingCourse::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_course_training_id")
                            .from(TrainingCourse::Table, TrainingCourse::TrainingId)
                            .to(Training::Table, Training::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_course_course_id")
                            .from(TrainingCourse::Table, TrainingCourse::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_training_course_training_id_course_id")
                    .table(TrainingCourse::Table)
                    .col(TrainingCourse::TrainingId)
                    .col(TrainingCourse::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_training_course_training_id_course_id")
                    .table(TrainingCourse::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TrainingCourse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrainingCourse {
    Table,
    Id,
    TrainingId,
    CourseId,
    CreatedAt,
}
