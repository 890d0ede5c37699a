use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::student::{StudentDto, StudentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FinalVerdict {
    #[serde(rename = "Réussi")]
    Passed,
    #[serde(rename = "Échoué")]
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExamResultDto {
    pub id: i32,
    pub exam_id: i32,
    pub student_id: i32,
    pub score: f64,
    pub passed: bool,
    pub student: Option<StudentDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct SaveResultDto {
    pub student_id: i32,
    #[validate(range(min = 0.0, max = 20.0, message = "La note doit être comprise entre 0 et 20."))]
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentExamResultDto {
    pub exam_id: i32,
    pub score: f64,
    pub passed: bool,
}

/// One student of one finished training in the global results report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrainingGlobalResultDto {
    pub training_id: i32,
    pub training_title: String,
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: StudentStatus,
    pub results: Vec<StudentExamResultDto>,
    pub final_result: FinalVerdict,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GlobalResultsDto {
    pub message: String,
    pub results: Vec<TrainingGlobalResultDto>,
}
