//! Exam factory for creating test exams.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test exams belonging to a training.
pub struct ExamFactory<'a> {
    db: &'a DatabaseConnection,
    training_id: i32,
    name: String,
    exam_type: String,
    date: Option<NaiveDate>,
}

impl<'a> ExamFactory<'a> {
    /// Creates a new ExamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Exam {id}"`
    /// - exam_type: `"Théorique"`
    /// - date: `None`
    pub fn new(db: &'a DatabaseConnection, training_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            training_id,
            name: format!("Exam {}", id),
            exam_type: "Théorique".to_string(),
            date: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn exam_type(mut self, exam_type: impl Into<String>) -> Self {
        self.exam_type = exam_type.into();
        self
    }

    pub fn date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = date;
        self
    }

    /// Builds and inserts the exam entity into the database.
    pub async fn build(self) -> Result<entity::exam::Model, DbErr> {
        entity::exam::ActiveModel {
            id: ActiveValue::NotSet,
            training_id: ActiveValue::Set(self.training_id),
            name: ActiveValue::Set(self.name),
            exam_type: ActiveValue::Set(self.exam_type),
            date: ActiveValue::Set(self.date),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an undated theoretical exam for the training.
pub async fn create_exam(
    db: &DatabaseConnection,
    training_id: i32,
) -> Result<entity::exam::Model, DbErr> {
    ExamFactory::new(db, training_id).build().await
}

/// Creates an exam held on the given date.
pub async fn create_exam_on(
    db: &DatabaseConnection,
    training_id: i32,
    date: NaiveDate,
) -> Result<entity::exam::Model, DbErr> {
    ExamFactory::new(db, training_id).date(Some(date)).build().await
}
