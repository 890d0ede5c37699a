use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::category::CategoryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrainingDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub registration_end_date: NaiveDate,
    pub duration_weeks: i32,
    pub price: f64,
    pub category_id: i32,
    pub category: Option<CategoryDto>,
    pub schedule: Option<String>,
    pub covering: Option<String>,
    pub is_finished: bool,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or updating a training.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct TrainingFormDto {
    #[validate(length(
        min = 3,
        max = 255,
        message = "Le titre doit contenir entre 3 et 255 caractères."
    ))]
    pub title: String,
    #[validate(length(
        min = 5,
        max = 1000,
        message = "La description doit contenir entre 5 et 1000 caractères."
    ))]
    pub description: String,
    pub start_date: NaiveDate,
    pub registration_end_date: NaiveDate,
    #[validate(range(
        min = 1,
        message = "La durée de la formation doit être d'au moins 1 semaine."
    ))]
    pub duration_weeks: i32,
    #[validate(range(min = 0.0, message = "Le prix ne peut pas être inférieur à 0."))]
    pub price: f64,
    pub category_id: i32,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub covering: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FinishTrainingDto {
    pub message: String,
    /// Number of students queued for a results notification.
    pub notified: usize,
}
