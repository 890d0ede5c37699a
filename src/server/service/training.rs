use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{exam::ExamType, student::StudentStatus},
    server::{
        data::{
            category::CategoryRepository, exam::ExamRepository, student::StudentRepository,
            training::TrainingRepository,
        },
        error::{validation::ValidationError, AppError},
        model::{
            exam::CreateExamParams,
            student::Student,
            training::{CreateTrainingParams, Training, UpdateTrainingParams},
        },
    },
};

/// Exams every new training starts with.
const DEFAULT_EXAMS: [(&str, ExamType); 2] =
    [("Code", ExamType::Theory), ("Conduite", ExamType::Practical)];

pub struct TrainingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all trainings with their category
    pub async fn get_all(&self) -> Result<Vec<Training>, AppError> {
        Ok(TrainingRepository::new(self.db).get_all().await?)
    }

    /// Gets trainings still open for registration on `today`
    pub async fn get_active(&self, today: NaiveDate) -> Result<Vec<Training>, AppError> {
        Ok(TrainingRepository::new(self.db).get_active(today).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Training, AppError> {
        TrainingRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates a training together with its default "Code" and "Conduite" exams.
    ///
    /// # Arguments
    /// - `params` - Training fields, already checked for length and range rules
    /// - `today` - Reference date; start and registration end may not be before it
    ///
    /// # Returns
    /// - `Ok(Training)` - The created training with its category
    /// - `Err(AppError::ValidationErr)` - Unknown category or a date in the past
    pub async fn create(
        &self,
        params: CreateTrainingParams,
        today: NaiveDate,
    ) -> Result<Training, AppError> {
        let mut errors = self.validate_category(params.category_id).await?;
        if params.start_date < today {
            errors = errors.with_field("start_date", START_DATE_IN_PAST);
        }
        if params.registration_end_date < today {
            errors = errors.with_field("registration_end_date", REGISTRATION_END_IN_PAST);
        }
        errors.into_result()?;

        let txn = self.db.begin().await?;

        let training = TrainingRepository::new(&txn).create(params).await?;

        let exam_repo = ExamRepository::new(&txn);
        for (name, exam_type) in DEFAULT_EXAMS {
            exam_repo
                .create(CreateExamParams {
                    training_id: training.id,
                    name: name.to_string(),
                    exam_type,
                    date: None,
                })
                .await?;
        }

        txn.commit().await?;

        self.get_by_id(training.id).await
    }

    /// Updates a training that is not finished yet.
    ///
    /// Dates are only checked against `today` when they change, so a training that has
    /// already started can still be edited.
    pub async fn update(
        &self,
        params: UpdateTrainingParams,
        today: NaiveDate,
    ) -> Result<Training, AppError> {
        let existing = self.get_by_id(params.id).await?;
        if existing.is_finished {
            return Err(AppError::Conflict(
                "Une formation terminée ne peut pas être modifiée.".to_string(),
            ));
        }

        let mut errors = self.validate_category(params.category_id).await?;
        if params.start_date != existing.start_date && params.start_date < today {
            errors = errors.with_field("start_date", START_DATE_IN_PAST);
        }
        if params.registration_end_date != existing.registration_end_date
            && params.registration_end_date < today
        {
            errors = errors.with_field("registration_end_date", REGISTRATION_END_IN_PAST);
        }
        errors.into_result()?;

        let id = params.id;
        TrainingRepository::new(self.db).update(params).await?;

        self.get_by_id(id).await
    }

    /// Deletes a training with its exams, results and notifications
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TrainingRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    /// Gets the validated students of a training
    pub async fn get_students(&self, id: i32) -> Result<Vec<Student>, AppError> {
        self.get_by_id(id).await?;

        Ok(StudentRepository::new(self.db)
            .get_by_training_id(id, Some(StudentStatus::Validated))
            .await?)
    }

    async fn validate_category(&self, category_id: i32) -> Result<ValidationError, AppError> {
        let mut errors = ValidationError::default();
        if !CategoryRepository::new(self.db).exists(category_id).await? {
            errors = errors.with_field("category_id", "La catégorie sélectionnée est invalide.");
        }

        Ok(errors)
    }
}

const START_DATE_IN_PAST: &str = "La date de début ne peut pas être antérieure à aujourd'hui.";
const REGISTRATION_END_IN_PAST: &str =
    "La date de fin d'inscription doit être égale ou postérieure à aujourd'hui.";

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Formation #{} introuvable.", id))
}
