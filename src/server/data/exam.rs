use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{
    exam::{CreateExamParams, Exam, ExamWithResults, UpdateExamParams},
    result::ExamResult,
};

pub struct ExamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateExamParams) -> Result<Exam, DbErr> {
        let entity = entity::exam::ActiveModel {
            training_id: ActiveValue::Set(params.training_id),
            name: ActiveValue::Set(params.name),
            exam_type: ActiveValue::Set(params.exam_type.as_str().to_string()),
            date: ActiveValue::Set(params.date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Exam::from_entity(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Exam>, DbErr> {
        entity::prelude::Exam::find_by_id(id)
            .one(self.db)
            .await?
            .map(Exam::from_entity)
            .transpose()
    }

    pub async fn get_all(&self) -> Result<Vec<Exam>, DbErr> {
        entity::prelude::Exam::find()
            .order_by_asc(entity::exam::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Exam::from_entity)
            .collect()
    }

    /// Gets the exams of a training ordered by ID
    pub async fn get_by_training_id(&self, training_id: i32) -> Result<Vec<Exam>, DbErr> {
        self.get_by_training_ids(&[training_id]).await
    }

    /// Gets the exams of several trainings ordered by ID
    pub async fn get_by_training_ids(&self, training_ids: &[i32]) -> Result<Vec<Exam>, DbErr> {
        if training_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Exam::find()
            .filter(entity::exam::Column::TrainingId.is_in(training_ids.iter().copied()))
            .order_by_asc(entity::exam::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Exam::from_entity)
            .collect()
    }

    /// Gets the exams of a training, each with all of its results
    ///
    /// Exams are ordered by ID and results within an exam by student ID. An exam
    /// without any result has an empty `results` list.
    pub async fn get_with_results_by_training_id(
        &self,
        training_id: i32,
    ) -> Result<Vec<ExamWithResults>, DbErr> {
        let exams = self.get_by_training_id(training_id).await?;
        if exams.is_empty() {
            return Ok(Vec::new());
        }

        let exam_ids: Vec<i32> = exams.iter().map(|e| e.id).collect();
        let mut results_by_exam: HashMap<i32, Vec<ExamResult>> = HashMap::new();
        for result in entity::prelude::ExamResult::find()
            .filter(entity::exam_result::Column::ExamId.is_in(exam_ids))
            .order_by_asc(entity::exam_result::Column::StudentId)
            .all(self.db)
            .await?
        {
            results_by_exam
                .entry(result.exam_id)
                .or_default()
                .push(ExamResult::from_entity(result));
        }

        Ok(exams
            .into_iter()
            .map(|exam| ExamWithResults {
                results: results_by_exam.remove(&exam.id).unwrap_or_default(),
                exam,
            })
            .collect())
    }

    /// Updates name, type and date of an exam
    ///
    /// # Returns
    /// - `Ok(Exam)` - The updated exam
    /// - `Err(DbErr::RecordNotFound)` - No exam with that ID
    pub async fn update(&self, params: UpdateExamParams) -> Result<Exam, DbErr> {
        let exam = entity::prelude::Exam::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Exam with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::exam::ActiveModel = exam.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.exam_type = ActiveValue::Set(params.exam_type.as_str().to_string());
        active_model.date = ActiveValue::Set(params.date);

        Exam::from_entity(active_model.update(self.db).await?)
    }

    /// Deletes an exam and, by cascade, its results
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Exam::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
