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
                    .table(AdminNotification::Table)
                    .if_not_exists()
                    .col(pk_auto(AdminNotification::Id))
                    .col(integer_null(AdminNotification::TrainingId))
                    .col(string(AdminNotification::Title))
                    .col(text(AdminNotification::Message))
                    .col(boolean(AdminNotification::IsRead).default(false))
                    .col(
                        timestamp_with_time_zone(AdminNotification::SentAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admin_notification_training_id")
                            .from(AdminNotification::Table, AdminNotification::TrainingId)
                            .to(Training::Table, Training::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminNotification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdminNotification {
    Table,
    Id,
    TrainingId,
    Title,
    Message,
    IsRead,
    SentAt,
}
