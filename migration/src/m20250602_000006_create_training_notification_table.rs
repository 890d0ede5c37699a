use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000002_create_training_table::Training,
    m20250601_000004_create_student_table::Student,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainingNotification::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainingNotification::Id))
                    .col(integer(TrainingNotification::TrainingId))
                    .col(integer(TrainingNotification::StudentId))
                    .col(string(TrainingNotification::Recipient))
                    .col(string(TrainingNotification::Subject))
                    .col(text(TrainingNotification::Payload))
                    .col(string(TrainingNotification::Status).default("pending"))
                    .col(integer(TrainingNotification::Attempts).default(0))
                    .col(text_null(TrainingNotification::LastError))
                    .col(
                        timestamp_with_time_zone(TrainingNotification::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(TrainingNotification::SentAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_notification_training_id")
                            .from(TrainingNotification::Table, TrainingNotification::TrainingId)
                            .to(Training::Table, Training::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_notification_student_id")
                            .from(TrainingNotification::Table, TrainingNotification::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A student is notified at most once per training
        manager
            .create_index(
                Index::create()
                    .name("idx_training_notification_training_id_student_id")
                    .table(TrainingNotification::Table)
                    .col(TrainingNotification::TrainingId)
                    .col(TrainingNotification::StudentId)
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
                    .name("idx_training_notification_training_id_student_id")
                    .table(TrainingNotification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TrainingNotification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrainingNotification {
    Table,
    Id,
    TrainingId,
    StudentId,
    Recipient,
    Subject,
    Payload,
    Status,
    Attempts,
    LastError,
    CreatedAt,
    SentAt,
}
