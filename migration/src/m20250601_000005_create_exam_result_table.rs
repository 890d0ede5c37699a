use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000003_create_exam_table::Exam, m20250601_000004_create_student_table::Student,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExamResult::Table)
                    .if_not_exists()
                    .col(pk_auto(ExamResult::Id))
                    .col(integer(ExamResult::ExamId))
                    .col(integer(ExamResult::StudentId))
                    .col(double(ExamResult::Score))
                    .col(boolean(ExamResult::Passed))
                    .col(
                        timestamp_with_time_zone(ExamResult::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ExamResult::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exam_result_exam_id")
                            .from(ExamResult::Table, ExamResult::ExamId)
                            .to(Exam::Table, Exam::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exam_result_student_id")
                            .from(ExamResult::Table, ExamResult::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One result per (exam, student) pair
        manager
            .create_index(
                Index::create()
                    .name("idx_exam_result_exam_id_student_id")
                    .table(ExamResult::Table)
                    .col(ExamResult::ExamId)
                    .col(ExamResult::StudentId)
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
                    .name("idx_exam_result_exam_id_student_id")
                    .table(ExamResult::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ExamResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ExamResult {
    Table,
    Id,
    ExamId,
    StudentId,
    Score,
    Passed,
    CreatedAt,
    UpdatedAt,
}
