//! Admin notification factory for seeding the activity feed.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating admin feed entries.
pub struct AdminNotificationFactory<'a> {
    db: &'a DatabaseConnection,
    training_id: Option<i32>,
    title: String,
    message: String,
    is_read: bool,
    sent_at: DateTime<Utc>,
}

impl<'a> AdminNotificationFactory<'a> {
    /// Creates a new AdminNotificationFactory with default values.
    ///
    /// Defaults:
    /// - training_id: `None`
    /// - title: `"Notification {id}"`
    /// - message: `"Message {id}"`
    /// - is_read: `false`
    /// - sent_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            training_id: None,
            title: format!("Notification {}", id),
            message: format!("Message {}", id),
            is_read: false,
            sent_at: Utc::now(),
        }
    }

    pub fn training_id(mut self, training_id: i32) -> Self {
        self.training_id = Some(training_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    pub fn sent_at(mut self, sent_at: DateTime<Utc>) -> Self {
        self.sent_at = sent_at;
        self
    }

    /// Builds and inserts the feed entry into the database.
    pub async fn build(self) -> Result<entity::admin_notification::Model, DbErr> {
        entity::admin_notification::ActiveModel {
            id: ActiveValue::NotSet,
            training_id: ActiveValue::Set(self.training_id),
            title: ActiveValue::Set(self.title),
            message: ActiveValue::Set(self.message),
            is_read: ActiveValue::Set(self.is_read),
            sent_at: ActiveValue::Set(self.sent_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread feed entry with default values.
pub async fn create_admin_notification(
    db: &DatabaseConnection,
) -> Result<entity::admin_notification::Model, DbErr> {
    AdminNotificationFactory::new(db).build().await
}
