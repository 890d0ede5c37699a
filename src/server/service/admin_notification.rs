//! Administrators' activity feed.
//!
//! Entries are written by the services that produce the events (student registration,
//! training completion) inside their own transactions; this service only reads and
//! curates the feed.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::admin_notification::AdminNotificationRepository, error::AppError,
    model::admin_notification::AdminNotification,
};

pub struct AdminNotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminNotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<AdminNotification>, AppError> {
        Ok(AdminNotificationRepository::new(self.db).get_all().await?)
    }

    pub async fn mark_read(&self, id: i32) -> Result<AdminNotification, AppError> {
        let repo = AdminNotificationRepository::new(self.db);
        if !repo.mark_read(id).await? {
            return Err(not_found(id));
        }

        repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AdminNotificationRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    /// Empties the feed, returning how many entries were removed
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        Ok(AdminNotificationRepository::new(self.db)
            .delete_all()
            .await?)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Notification #{} introuvable.", id))
}
