use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Common courses belong in every training; specific ones are added per training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    Common,
    Specific,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub course_type: CourseType,
    pub file_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CourseFormDto {
    #[validate(length(min = 1, max = 255, message = "Le nom du cours est requis."))]
    pub name: String,
    #[serde(rename = "type")]
    pub course_type: CourseType,
    #[serde(default)]
    #[validate(length(max = 255, message = "Le chemin du fichier est trop long."))]
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttachCourseDto {
    pub course_id: i32,
}
