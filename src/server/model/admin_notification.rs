//! Administrators' activity feed.

use chrono::{DateTime, Utc};

use crate::model::notification::AdminNotificationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct AdminNotification {
    pub id: i32,
    /// Training the event concerns, cleared when that training is deleted.
    pub training_id: Option<i32>,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub sent_at: DateTime<Utc>,
}

impl AdminNotification {
    pub fn from_entity(entity: entity::admin_notification::Model) -> Self {
        Self {
            id: entity.id,
            training_id: entity.training_id,
            title: entity.title,
            message: entity.message,
            is_read: entity.is_read,
            sent_at: entity.sent_at,
        }
    }

    pub fn into_dto(self) -> AdminNotificationDto {
        AdminNotificationDto {
            id: self.id,
            training_id: self.training_id,
            title: self.title,
            message: self.message,
            sent_at: self.sent_at,
            is_read: self.is_read,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAdminNotificationParams {
    pub training_id: Option<i32>,
    pub title: String,
    pub message: String,
}
