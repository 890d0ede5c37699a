//! Training results notification dispatcher.
//!
//! Notifications are queued in the `training_notification` outbox by the transaction that
//! finishes a training. The dispatcher renders and sends them afterwards, one student at a
//! time. Each row is claimed before it reaches the mailer, so a dispatch and a retry
//! running at the same moment never send the same mail twice. A failed send is recorded
//! on its row and logged; it never stops the remaining students from being notified and
//! never undoes the finished training. Failed rows are retried by the notification retry
//! scheduler until `MAX_ATTEMPTS` is reached.

pub mod template;

use chrono::{Duration, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::TrainingNotificationRepository,
    error::{mail::MailError, AppError},
    mail::Mailer,
    model::{
        completion::StudentResultSummary,
        notification::{DispatchReport, TrainingNotification},
    },
};

/// Delivery attempts after which a failed notification is abandoned.
pub const MAX_ATTEMPTS: i32 = 3;

/// Age after which a pending notification is considered orphaned and retried.
const STALE_PENDING_MINUTES: i64 = 10;

pub struct NotificationDispatcher<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a dyn Mailer,
}

impl<'a> NotificationDispatcher<'a> {
    pub fn new(db: &'a DatabaseConnection, mailer: &'a dyn Mailer) -> Self {
        Self { db, mailer }
    }

    /// Renders and sends the results mail for one student.
    pub async fn notify(&self, summary: &StudentResultSummary) -> Result<(), MailError> {
        let message = template::render(summary);
        self.mailer.send(&message).await
    }

    /// Sends every pending notification of a training, in enrollment order.
    ///
    /// # Returns
    /// - `Ok(DispatchReport)` - How many mails were sent and how many failed
    /// - `Err(AppError)` - The pending notifications could not be loaded
    pub async fn dispatch_pending(&self, training_id: i32) -> Result<DispatchReport, AppError> {
        let notifications = TrainingNotificationRepository::new(self.db)
            .get_pending_by_training_id(training_id)
            .await?;

        let report = self.deliver(notifications).await;

        tracing::info!(
            "Training {} results dispatched via {} mailer: {} sent, {} failed",
            training_id,
            self.mailer.name(),
            report.sent,
            report.failed
        );

        Ok(report)
    }

    /// Sends again every failed notification below the attempt limit, plus pending
    /// notifications that were never dispatched.
    pub async fn retry_failed(&self) -> Result<DispatchReport, AppError> {
        let stale_before = Utc::now() - Duration::minutes(STALE_PENDING_MINUTES);
        let notifications = TrainingNotificationRepository::new(self.db)
            .get_retryable(MAX_ATTEMPTS, stale_before)
            .await?;

        if notifications.is_empty() {
            return Ok(DispatchReport::default());
        }

        let report = self.deliver(notifications).await;

        tracing::info!(
            "Notification retry: {} sent, {} failed",
            report.sent,
            report.failed
        );

        Ok(report)
    }

    async fn deliver(&self, notifications: Vec<TrainingNotification>) -> DispatchReport {
        let repo = TrainingNotificationRepository::new(self.db);
        let mut report = DispatchReport::default();

        for notification in notifications {
            match repo.claim(&notification).await {
                Ok(true) => {}
                Ok(false) => {
                    tracing::debug!(
                        "Notification {} already claimed by another dispatcher",
                        notification.id
                    );
                    continue;
                }
                Err(e) => {
                    tracing::error!("Failed to claim notification {}: {}", notification.id, e);
                    continue;
                }
            }

            let outcome = match serde_json::from_str::<StudentResultSummary>(&notification.payload)
            {
                Ok(summary) => self.notify(&summary).await.map_err(|e| e.to_string()),
                Err(e) => Err(format!("Invalid notification payload: {}", e)),
            };

            let recorded = match outcome {
                Ok(()) => {
                    report.sent += 1;
                    repo.mark_sent(notification.id).await
                }
                Err(error) => {
                    tracing::error!(
                        "Failed to send training {} results to {} (attempt {}): {}",
                        notification.training_id,
                        notification.recipient,
                        notification.attempts + 1,
                        error
                    );
                    report.failed += 1;
                    repo.mark_failed(notification.id, &error).await
                }
            };

            if let Err(e) = recorded {
                tracing::error!(
                    "Failed to record delivery of notification {}: {}",
                    notification.id,
                    e
                );
            }
        }

        report
    }
}
