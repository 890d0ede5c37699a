//! Training notification outbox repository.
//!
//! Rows are written in the transaction that finishes a training and are then
//! delivered, and possibly retried, by the notification dispatcher.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::notification::{
    CreateTrainingNotificationParams, NotificationStatus, TrainingNotification,
};

pub struct TrainingNotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainingNotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Queues one pending notification per params entry
    pub async fn create_many(
        &self,
        params: Vec<CreateTrainingNotificationParams>,
    ) -> Result<(), DbErr> {
        if params.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let models = params
            .into_iter()
            .map(|param| entity::training_notification::ActiveModel {
                training_id: ActiveValue::Set(param.training_id),
                student_id: ActiveValue::Set(param.student_id),
                recipient: ActiveValue::Set(param.recipient),
                subject: ActiveValue::Set(param.subject),
                payload: ActiveValue::Set(param.payload),
                status: ActiveValue::Set(NotificationStatus::Pending.as_str().to_string()),
                attempts: ActiveValue::Set(0),
                last_error: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                sent_at: ActiveValue::Set(None),
                ..Default::default()
            });

        entity::prelude::TrainingNotification::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets every notification of a training in creation order
    pub async fn get_by_training_id(
        &self,
        training_id: i32,
    ) -> Result<Vec<TrainingNotification>, DbErr> {
        Self::collect(
            entity::prelude::TrainingNotification::find()
                .filter(entity::training_notification::Column::TrainingId.eq(training_id))
                .order_by_asc(entity::training_notification::Column::Id)
                .all(self.db)
                .await?,
        )
    }

    /// Gets the notifications of a training that have not been attempted yet
    pub async fn get_pending_by_training_id(
        &self,
        training_id: i32,
    ) -> Result<Vec<TrainingNotification>, DbErr> {
        Self::collect(
            entity::prelude::TrainingNotification::find()
                .filter(entity::training_notification::Column::TrainingId.eq(training_id))
                .filter(
                    entity::training_notification::Column::Status
                        .eq(NotificationStatus::Pending.as_str()),
                )
                .order_by_asc(entity::training_notification::Column::Id)
                .all(self.db)
                .await?,
        )
    }

    /// Gets notifications eligible for another delivery attempt.
    ///
    /// Includes failed rows that have been attempted fewer than `max_attempts` times and
    /// pending rows created before `stale_before`, which were left behind when the process
    /// stopped between committing a finished training and dispatching its mails.
    pub async fn get_retryable(
        &self,
        max_attempts: i32,
        stale_before: DateTime<Utc>,
    ) -> Result<Vec<TrainingNotification>, DbErr> {
        use entity::training_notification::Column;

        Self::collect(
            entity::prelude::TrainingNotification::find()
                .filter(
                    Condition::any()
                        .add(
                            Condition::all()
                                .add(Column::Status.eq(NotificationStatus::Failed.as_str()))
                                .add(Column::Attempts.lt(max_attempts)),
                        )
                        .add(
                            Condition::all()
                                .add(Column::Status.eq(NotificationStatus::Pending.as_str()))
                                .add(Column::CreatedAt.lt(stale_before)),
                        ),
                )
                .order_by_asc(Column::Id)
                .all(self.db)
                .await?,
        )
    }

    /// Takes ownership of a notification before handing it to the mailer.
    ///
    /// The row moves to `sending` only if it is still in the status and attempt count
    /// it was read with, so two dispatchers holding the same snapshot cannot both send
    /// it. A row left in `sending` by a crash is never picked up again.
    ///
    /// # Returns
    /// - `Ok(true)` - The caller owns the row and must record the attempt
    /// - `Ok(false)` - Another dispatcher claimed or finished the row first
    pub async fn claim(&self, notification: &TrainingNotification) -> Result<bool, DbErr> {
        use entity::training_notification::Column;

        let result = entity::prelude::TrainingNotification::update_many()
            .col_expr(Column::Status, Expr::value(NotificationStatus::Sending.as_str()))
            .filter(Column::Id.eq(notification.id))
            .filter(Column::Status.eq(notification.status.as_str()))
            .filter(Column::Attempts.eq(notification.attempts))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Marks a notification as delivered
    pub async fn mark_sent(&self, id: i32) -> Result<(), DbErr> {
        self.record_attempt(id, NotificationStatus::Sent, None).await
    }

    /// Marks a notification as failed, keeping the error text for diagnostics
    pub async fn mark_failed(&self, id: i32, error: &str) -> Result<(), DbErr> {
        self.record_attempt(id, NotificationStatus::Failed, Some(error.to_string()))
            .await
    }

    /// Stores the outcome of one delivery attempt and counts it
    async fn record_attempt(
        &self,
        id: i32,
        status: NotificationStatus,
        error: Option<String>,
    ) -> Result<(), DbErr> {
        let notification = entity::prelude::TrainingNotification::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Training notification with id {} not found",
                id
            )))?;
        let attempts = notification.attempts + 1;

        let mut active_model: entity::training_notification::ActiveModel = notification.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        active_model.attempts = ActiveValue::Set(attempts);
        active_model.last_error = ActiveValue::Set(error);
        if status == NotificationStatus::Sent {
            active_model.sent_at = ActiveValue::Set(Some(Utc::now()));
        }
        active_model.update(self.db).await?;

        Ok(())
    }

    fn collect(
        entities: Vec<entity::training_notification::Model>,
    ) -> Result<Vec<TrainingNotification>, DbErr> {
        entities
            .into_iter()
            .map(TrainingNotification::from_entity)
            .collect()
    }
}
