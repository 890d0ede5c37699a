use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Training::Table)
                    .if_not_exists()
                    .col(pk_auto(Training::Id))
                    .col(string(Training::Title))
                    .col(text(Training::Description))
                    .col(date(Training::StartDate))
                    .col(date(Training::RegistrationEndDate))
                    .col(integer(Training::DurationWeeks))
                    .col(double(Training::Price))
                    .col(integer(Training::CategoryId))
                    .col(text_null(Training::Schedule))
                    .col(string_null(Training::Covering))
                    .col(boolean(Training::IsFinished).default(false))
                    .col(
                        timestamp_with_time_zone(Training::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_category_id")
                            .from(Training::Table, Training::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Training::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Training {
    Table,
    Id,
    Title,
    Description,
    StartDate,
    RegistrationEndDate,
    DurationWeeks,
    Price,
    CategoryId,
    Schedule,
    Covering,
    IsFinished,
    CreatedAt,
}
