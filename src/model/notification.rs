use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Entry of the administrators' activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdminNotificationDto {
    pub id: i32,
    pub training_id: Option<i32>,
    pub title: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
    pub is_read: bool,
}
