//! Training factory for creating test trainings.

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test trainings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let training = TrainingFactory::new(&db, category.id)
///     .title("Permis B - Juin")
///     .finished(true)
///     .build()
///     .await?;
/// ```
pub struct TrainingFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: i32,
    title: String,
    start_date: NaiveDate,
    registration_end_date: NaiveDate,
    duration_weeks: i32,
    price: f64,
    is_finished: bool,
}

impl<'a> TrainingFactory<'a> {
    /// Creates a new TrainingFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Training {id}"`
    /// - start_date: 30 days from today
    /// - registration_end_date: 20 days from today
    /// - duration_weeks: `8`
    /// - price: `450.0`
    /// - is_finished: `false`
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            category_id,
            title: format!("Training {}", id),
            start_date: today + Duration::days(30),
            registration_end_date: today + Duration::days(20),
            duration_weeks: 8,
            price: 450.0,
            is_finished: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn registration_end_date(mut self, registration_end_date: NaiveDate) -> Self {
        self.registration_end_date = registration_end_date;
        self
    }

    pub fn finished(mut self, is_finished: bool) -> Self {
        self.is_finished = is_finished;
        self
    }

    /// Builds and inserts the training entity into the database.
    pub async fn build(self) -> Result<entity::training::Model, DbErr> {
        entity::training::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("Formation de test".to_string()),
            start_date: ActiveValue::Set(self.start_date),
            registration_end_date: ActiveValue::Set(self.registration_end_date),
            duration_weeks: ActiveValue::Set(self.duration_weeks),
            price: ActiveValue::Set(self.price),
            category_id: ActiveValue::Set(self.category_id),
            schedule: ActiveValue::Set(None),
            covering: ActiveValue::Set(None),
            is_finished: ActiveValue::Set(self.is_finished),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unfinished training with default values.
pub async fn create_training(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::training::Model, DbErr> {
    TrainingFactory::new(db, category_id).build().await
}
