//! Models produced when a training is evaluated for completion and when finished
//! trainings are reported on.

use serde::{Deserialize, Serialize};

use crate::model::{
    result::{FinalVerdict, StudentExamResultDto, TrainingGlobalResultDto},
    student::StudentStatus,
};

impl FinalVerdict {
    /// Label shown to students and administrators.
    pub fn label(&self) -> &'static str {
        match self {
            FinalVerdict::Passed => "Réussi",
            FinalVerdict::Failed => "Échoué",
        }
    }
}

/// Score of one exam as seen in a student summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentExamResult {
    pub exam_id: i32,
    pub score: f64,
    pub passed: bool,
}

impl StudentExamResult {
    pub fn into_dto(self) -> StudentExamResultDto {
        StudentExamResultDto {
            exam_id: self.exam_id,
            score: self.score,
            passed: self.passed,
        }
    }
}

/// Everything a student is told about the outcome of a finished training.
///
/// Stored as the JSON payload of the notification outbox row so that the message
/// can be rendered again on retry without reading results that may have changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentResultSummary {
    pub training_id: i32,
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Results for the training's exams, ordered by exam id.
    pub results: Vec<StudentExamResult>,
    pub final_result: FinalVerdict,
}

/// One row of the global results report.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingGlobalResultRow {
    pub training_id: i32,
    pub training_title: String,
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: StudentStatus,
    pub results: Vec<StudentExamResult>,
    pub final_result: FinalVerdict,
}

impl TrainingGlobalResultRow {
    pub fn into_dto(self) -> TrainingGlobalResultDto {
        TrainingGlobalResultDto {
            training_id: self.training_id,
            training_title: self.training_title,
            student_id: self.student_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            status: self.status,
            results: self
                .results
                .into_iter()
                .map(StudentExamResult::into_dto)
                .collect(),
            final_result: self.final_result,
        }
    }
}

/// Outcome of asking for a training to be finished.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionOutcome {
    /// The training was flipped to finished; one notification was queued per summary.
    Finished {
        summaries: Vec<StudentResultSummary>,
    },
    /// Nothing changed because the training was already finished.
    AlreadyFinished,
    /// Nothing changed because these exams have no result yet.
    MissingResults { exam_ids: Vec<i32> },
}
