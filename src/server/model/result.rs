//! Exam result domain models and the scoring rules.

use chrono::{DateTime, Utc};

use crate::{model::result::ExamResultDto, server::model::student::Student};

/// Lowest accepted score.
pub const MIN_SCORE: f64 = 0.0;
/// Highest accepted score.
pub const MAX_SCORE: f64 = 20.0;
/// A score at or above this mark passes the exam.
pub const PASS_THRESHOLD: f64 = 10.0;

/// Whether a score passes an exam.
pub fn is_passing(score: f64) -> bool {
    score >= PASS_THRESHOLD
}

/// Whether a score lies within the accepted scale. NaN is never valid.
pub fn is_valid_score(score: f64) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}

/// Score of one student for one exam.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamResult {
    pub id: i32,
    pub exam_id: i32,
    pub student_id: i32,
    pub score: f64,
    /// Always equal to `is_passing(score)` for the stored score.
    pub passed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ExamResult {
    pub fn from_entity(entity: entity::exam_result::Model) -> Self {
        Self {
            id: entity.id,
            exam_id: entity.exam_id,
            student_id: entity.student_id,
            score: entity.score,
            passed: entity.passed,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ExamResultDto {
        ExamResultDto {
            id: self.id,
            exam_id: self.exam_id,
            student_id: self.student_id,
            score: self.score,
            passed: self.passed,
            student: None,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Result with the student it belongs to, as listed per exam.
#[derive(Debug, Clone)]
pub struct ExamResultWithStudent {
    pub result: ExamResult,
    pub student: Option<Student>,
}

impl ExamResultWithStudent {
    pub fn into_dto(self) -> ExamResultDto {
        let mut dto = self.result.into_dto();
        dto.student = self.student.map(Student::into_dto);
        dto
    }
}

/// Parameters for recording a score. `passed` is derived, never supplied.
#[derive(Debug, Clone)]
pub struct SaveResultParams {
    pub exam_id: i32,
    pub student_id: i32,
    pub score: f64,
}
