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
                    .table(Exam::Table)
                    .if_not_exists()
                    .col(pk_auto(Exam::Id))
                    .col(integer(Exam::TrainingId))
                    .col(string(Exam::Name))
                    .col(string(Exam::Type))
                    .col(date_null(Exam::Date))
                    .col(
                        timestamp_with_time_zone(Exam::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exam_training_id")
                            .from(Exam::Table, Exam::TrainingId)
                            .to(Training::Table, Training::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Exam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Exam {
    Table,
    Id,
    TrainingId,
    Name,
    Type,
    Date,
    CreatedAt,
}
