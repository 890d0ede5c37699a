use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000002_create_training_table::Training;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string(Student::FirstName))
                    .col(string(Student::LastName))
                    .col(string_uniq(Student::Email))
                    .col(string_null(Student::Phone))
                    .col(string(Student::Status).default("pending"))
                    .col(integer_null(Student::TrainingId))
                    .col(
                        timestamp_with_time_zone(Student::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_training_id")
                            .from(Student::Table, Student::TrainingId)
                            .to(Training::Table, Training::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_training_id_status")
                    .table(Student::Table)
                    .col(Student::TrainingId)
                    .col(Student::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_student_training_id_status")
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Status,
    TrainingId,
    CreatedAt,
}
