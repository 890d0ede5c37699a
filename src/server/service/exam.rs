use sea_orm::DatabaseConnection;

use crate::server::{
    data::{exam::ExamRepository, training::TrainingRepository},
    error::AppError,
    model::exam::{CreateExamParams, Exam, UpdateExamParams},
};

pub struct ExamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Exam>, AppError> {
        Ok(ExamRepository::new(self.db).get_all().await?)
    }

    /// Gets the exams of a training ordered by ID
    pub async fn get_by_training_id(&self, training_id: i32) -> Result<Vec<Exam>, AppError> {
        self.ensure_training(training_id, false).await?;

        Ok(ExamRepository::new(self.db)
            .get_by_training_id(training_id)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Exam, AppError> {
        ExamRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Adds an exam to a training that is not finished
    pub async fn create(&self, params: CreateExamParams) -> Result<Exam, AppError> {
        self.ensure_training(params.training_id, true).await?;

        Ok(ExamRepository::new(self.db).create(params).await?)
    }

    /// Updates an exam of a training that is not finished
    pub async fn update(&self, params: UpdateExamParams) -> Result<Exam, AppError> {
        let exam = self.get_by_id(params.id).await?;
        self.ensure_training(exam.training_id, true).await?;

        Ok(ExamRepository::new(self.db).update(params).await?)
    }

    /// Deletes an exam of a training that is not finished, with its results
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let exam = self.get_by_id(id).await?;
        self.ensure_training(exam.training_id, true).await?;

        ExamRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Checks that the training exists and, when `require_unfinished`, that it is not finished
    async fn ensure_training(
        &self,
        training_id: i32,
        require_unfinished: bool,
    ) -> Result<(), AppError> {
        let training = TrainingRepository::new(self.db)
            .get_by_id(training_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Formation #{} introuvable.", training_id))
            })?;

        if require_unfinished && training.is_finished {
            return Err(AppError::Conflict(
                "Les examens d'une formation terminée ne peuvent plus être modifiés.".to_string(),
            ));
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Examen #{} introuvable.", id))
}
