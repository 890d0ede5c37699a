use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    result::{is_passing, ExamResult, ExamResultWithStudent, SaveResultParams},
    student::Student,
};

pub struct ExamResultRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExamResultRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records the score of a student for an exam.
    ///
    /// Inserts a new result or, when the (exam, student) pair already has one, replaces its
    /// score. `passed` is derived from the score on every write, so a stored result never
    /// disagrees with the pass mark.
    ///
    /// # Returns
    /// - `Ok(ExamResult)` - The created or updated result
    /// - `Err(DbErr)` - Database error, including a foreign key violation
    pub async fn upsert(&self, params: SaveResultParams) -> Result<ExamResult, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::ExamResult::insert(entity::exam_result::ActiveModel {
            exam_id: ActiveValue::Set(params.exam_id),
            student_id: ActiveValue::Set(params.student_id),
            score: ActiveValue::Set(params.score),
            passed: ActiveValue::Set(is_passing(params.score)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::exam_result::Column::ExamId,
                entity::exam_result::Column::StudentId,
            ])
            .update_columns([
                entity::exam_result::Column::Score,
                entity::exam_result::Column::Passed,
                entity::exam_result::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(ExamResult::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ExamResult>, DbErr> {
        let entity = entity::prelude::ExamResult::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ExamResult::from_entity))
    }

    /// Gets the results of an exam with their students, ordered by result ID
    pub async fn get_by_exam_id_with_students(
        &self,
        exam_id: i32,
    ) -> Result<Vec<ExamResultWithStudent>, DbErr> {
        entity::prelude::ExamResult::find()
            .filter(entity::exam_result::Column::ExamId.eq(exam_id))
            .find_also_related(entity::prelude::Student)
            .order_by_asc(entity::exam_result::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(result, student)| {
                Ok(ExamResultWithStudent {
                    result: ExamResult::from_entity(result),
                    student: student.map(Student::from_entity).transpose()?,
                })
            })
            .collect()
    }

    /// Gets all results for a set of exams ordered by exam ID then student ID
    pub async fn get_by_exam_ids(&self, exam_ids: &[i32]) -> Result<Vec<ExamResult>, DbErr> {
        if exam_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = entity::prelude::ExamResult::find()
            .filter(entity::exam_result::Column::ExamId.is_in(exam_ids.iter().copied()))
            .order_by_asc(entity::exam_result::Column::ExamId)
            .order_by_asc(entity::exam_result::Column::StudentId)
            .all(self.db)
            .await?;

        Ok(results.into_iter().map(ExamResult::from_entity).collect())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ExamResult::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
