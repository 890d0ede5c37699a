use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ExamType {
    #[serde(rename = "Théorique")]
    Theory,
    #[serde(rename = "Pratique")]
    Practical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExamDto {
    pub id: i32,
    pub training_id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub exam_type: ExamType,
    pub date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateExamDto {
    pub training_id: i32,
    #[validate(length(min = 1, max = 255, message = "Le nom de l'examen est requis."))]
    pub name: String,
    #[serde(rename = "type")]
    pub exam_type: ExamType,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateExamDto {
    #[validate(length(min = 1, max = 255, message = "Le nom de l'examen est requis."))]
    pub name: String,
    #[serde(rename = "type")]
    pub exam_type: ExamType,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}
