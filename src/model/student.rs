use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    Pending,
    Validated,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: StudentStatus,
    pub training_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterStudentDto {
    #[validate(length(min = 1, max = 255, message = "Le prénom est requis."))]
    pub first_name: String,
    #[validate(length(min = 1, max = 255, message = "Le nom est requis."))]
    pub last_name: String,
    #[validate(email(message = "L'adresse email est invalide."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 30, message = "Le numéro de téléphone est trop long."))]
    pub phone: Option<String>,
    #[serde(default)]
    pub training_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 255, message = "Le prénom est requis."))]
    pub first_name: String,
    #[validate(length(min = 1, max = 255, message = "Le nom est requis."))]
    pub last_name: String,
    #[validate(email(message = "L'adresse email est invalide."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 30, message = "Le numéro de téléphone est trop long."))]
    pub phone: Option<String>,
    #[serde(default)]
    pub training_id: Option<i32>,
}
