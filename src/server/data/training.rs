//! Training data repository.
//!
//! Provides `TrainingRepository` for training CRUD, the active/finished listings and the
//! guarded transition to finished. The repository is generic over `ConnectionTrait` so the
//! same queries run on the pool or inside a transaction.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::training::{CreateTrainingParams, Training, UpdateTrainingParams};

pub struct TrainingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new unfinished training
    ///
    /// # Returns
    /// - `Ok(Training)` - The created training without its category loaded
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an unknown category
    pub async fn create(&self, params: CreateTrainingParams) -> Result<Training, DbErr> {
        let entity = entity::training::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            start_date: ActiveValue::Set(params.start_date),
            registration_end_date: ActiveValue::Set(params.registration_end_date),
            duration_weeks: ActiveValue::Set(params.duration_weeks),
            price: ActiveValue::Set(params.price),
            category_id: ActiveValue::Set(params.category_id),
            schedule: ActiveValue::Set(params.schedule),
            covering: ActiveValue::Set(params.covering),
            is_finished: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Training::from_entity(entity, None))
    }

    /// Gets a training by ID with its category
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Training>, DbErr> {
        let result = entity::prelude::Training::find_by_id(id)
            .find_also_related(entity::prelude::Category)
            .one(self.db)
            .await?;

        Ok(result.map(|(training, category)| Training::from_entity(training, category)))
    }

    /// Gets all trainings with their category, soonest start first
    pub async fn get_all(&self) -> Result<Vec<Training>, DbErr> {
        let results = entity::prelude::Training::find()
            .find_also_related(entity::prelude::Category)
            .order_by_asc(entity::training::Column::StartDate)
            .order_by_asc(entity::training::Column::Id)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(training, category)| Training::from_entity(training, category))
            .collect())
    }

    /// Gets unfinished trainings that have not started and are still open for registration
    ///
    /// # Arguments
    /// - `today` - Reference date; both start and registration end must be on or after it
    pub async fn get_active(&self, today: NaiveDate) -> Result<Vec<Training>, DbErr> {
        let results = entity::prelude::Training::find()
            .find_also_related(entity::prelude::Category)
            .filter(entity::training::Column::IsFinished.eq(false))
            .filter(entity::training::Column::StartDate.gte(today))
            .filter(entity::training::Column::RegistrationEndDate.gte(today))
            .order_by_asc(entity::training::Column::StartDate)
            .order_by_asc(entity::training::Column::Id)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(training, category)| Training::from_entity(training, category))
            .collect())
    }

    /// Gets every finished training ordered by ID
    pub async fn get_finished(&self) -> Result<Vec<Training>, DbErr> {
        let trainings = entity::prelude::Training::find()
            .filter(entity::training::Column::IsFinished.eq(true))
            .order_by_asc(entity::training::Column::Id)
            .all(self.db)
            .await?;

        Ok(trainings
            .into_iter()
            .map(|training| Training::from_entity(training, None))
            .collect())
    }

    /// Replaces the editable fields of a training
    ///
    /// # Returns
    /// - `Ok(Training)` - The updated training without its category loaded
    /// - `Err(DbErr::RecordNotFound)` - No training with that ID
    pub async fn update(&self, params: UpdateTrainingParams) -> Result<Training, DbErr> {
        let training = entity::prelude::Training::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Training with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::training::ActiveModel = training.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.description = ActiveValue::Set(params.description);
        active_model.start_date = ActiveValue::Set(params.start_date);
        active_model.registration_end_date = ActiveValue::Set(params.registration_end_date);
        active_model.duration_weeks = ActiveValue::Set(params.duration_weeks);
        active_model.price = ActiveValue::Set(params.price);
        active_model.category_id = ActiveValue::Set(params.category_id);
        active_model.schedule = ActiveValue::Set(params.schedule);
        active_model.covering = ActiveValue::Set(params.covering);

        let entity = active_model.update(self.db).await?;

        Ok(Training::from_entity(entity, None))
    }

    /// Deletes a training; exams, results and notifications cascade
    ///
    /// # Returns
    /// - `Ok(true)` - Training deleted
    /// - `Ok(false)` - No training with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Training::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Flips a training to finished if it is not finished yet.
    ///
    /// The update is conditional on `is_finished = false`, so when two callers race only
    /// one of them observes the transition.
    ///
    /// # Returns
    /// - `Ok(true)` - This call performed the transition
    /// - `Ok(false)` - The training was already finished or does not exist
    pub async fn mark_finished(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Training::update_many()
            .col_expr(entity::training::Column::IsFinished, Expr::value(true))
            .filter(entity::training::Column::Id.eq(id))
            .filter(entity::training::Column::IsFinished.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
