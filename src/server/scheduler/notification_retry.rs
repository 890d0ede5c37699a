use std::sync::Arc;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, mail::Mailer, service::notification::NotificationDispatcher};

/// Starts the notification retry scheduler
///
/// On every tick the job resends failed result notifications that are still below the
/// attempt limit, and pending ones left behind when the process stopped before
/// dispatching them.
///
/// # Arguments
/// - `db`: Database connection
/// - `mailer`: Mail transport shared with the request handlers
/// - `cron`: Six field cron expression (seconds first)
pub async fn start_scheduler(
    db: DatabaseConnection,
    mailer: Arc<dyn Mailer>,
    cron: &str,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let db = db.clone();
        let mailer = mailer.clone();

        Box::pin(async move {
            if let Err(e) = NotificationDispatcher::new(&db, mailer.as_ref())
                .retry_failed()
                .await
            {
                tracing::error!("Error retrying training notifications: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Notification retry scheduler started ({})", cron);

    Ok(scheduler)
}
