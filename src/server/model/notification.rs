//! Training result notification outbox models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

/// Delivery state of an outbox row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStatus {
    Pending,
    /// Claimed by a dispatcher and handed to the mailer.
    Sending,
    Sent,
    Failed,
}

impl NotificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationStatus::Pending => "pending",
            NotificationStatus::Sending => "sending",
            NotificationStatus::Sent => "sent",
            NotificationStatus::Failed => "failed",
        }
    }

    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        match value {
            "pending" => Ok(NotificationStatus::Pending),
            "sending" => Ok(NotificationStatus::Sending),
            "sent" => Ok(NotificationStatus::Sent),
            "failed" => Ok(NotificationStatus::Failed),
            other => Err(DbErr::Custom(format!(
                "Unknown notification status '{}'",
                other
            ))),
        }
    }
}

/// Results mail queued for one student of a finished training.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingNotification {
    pub id: i32,
    pub training_id: i32,
    pub student_id: i32,
    pub recipient: String,
    pub subject: String,
    /// JSON encoded `StudentResultSummary`.
    pub payload: String,
    pub status: NotificationStatus,
    pub attempts: i32,
    pub last_error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
}

impl TrainingNotification {
    pub fn from_entity(entity: entity::training_notification::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            training_id: entity.training_id,
            student_id: entity.student_id,
            recipient: entity.recipient,
            subject: entity.subject,
            payload: entity.payload,
            status: NotificationStatus::from_db(&entity.status)?,
            attempts: entity.attempts,
            last_error: entity.last_error,
            created_at: entity.created_at,
            sent_at: entity.sent_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateTrainingNotificationParams {
    pub training_id: i32,
    pub student_id: i32,
    pub recipient: String,
    pub subject: String,
    pub payload: String,
}

/// Counts of a delivery pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub sent: usize,
    pub failed: usize,
}
