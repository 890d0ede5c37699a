//! Training completion evaluator.
//!
//! Finishing a training is gated on every exam of the training having at least one
//! result. When the gate passes, the training is flipped to finished, a summary with the
//! final verdict is built for each validated student and one notification per student is
//! queued in the outbox, all in a single transaction along with an entry in the
//! administrators' feed. Sending the mails is left to the notification dispatcher once
//! the transaction has committed.

use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::student::StudentStatus,
    server::{
        data::{
            admin_notification::AdminNotificationRepository, exam::ExamRepository,
            notification::TrainingNotificationRepository, student::StudentRepository,
            training::TrainingRepository,
        },
        error::AppError,
        model::{
            admin_notification::CreateAdminNotificationParams,
            completion::{CompletionOutcome, StudentResultSummary},
            exam::{Exam, ExamWithResults},
            notification::CreateTrainingNotificationParams,
            result::ExamResult,
            student::Student,
        },
        service::{notification::template::RESULTS_SUBJECT, verdict},
    },
};

pub const COMPLETION_TITLE: &str = "Formation terminée";

pub struct CompletionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompletionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finishes a training if every one of its exams has a result.
    ///
    /// The check, the transition and the queueing of notifications happen in one
    /// transaction. Nothing is written unless the outcome is `Finished`, and a training
    /// is only ever reported `Finished` once, so notifications are never queued twice.
    ///
    /// # Returns
    /// - `Ok(CompletionOutcome::Finished)` - Training finished; summaries of the notified students
    /// - `Ok(CompletionOutcome::MissingResults)` - Some exams have no result; nothing changed
    /// - `Ok(CompletionOutcome::AlreadyFinished)` - Training was already finished; nothing changed
    /// - `Err(AppError::NotFound)` - No training with that ID
    /// - `Err(AppError)` - Database or serialization error; the transaction is rolled back
    pub async fn evaluate_and_finish(
        &self,
        training_id: i32,
    ) -> Result<CompletionOutcome, AppError> {
        let txn = self.db.begin().await?;

        let outcome = match evaluate(&txn, training_id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                txn.rollback().await?;
                return Err(e);
            }
        };

        match &outcome {
            CompletionOutcome::Finished { summaries } => {
                txn.commit().await?;
                tracing::info!(
                    "Training {} finished, {} student notifications queued",
                    training_id,
                    summaries.len()
                );
            }
            CompletionOutcome::MissingResults { exam_ids } => {
                txn.rollback().await?;
                tracing::warn!(
                    "Training {} cannot be finished, exams without results: {:?}",
                    training_id,
                    exam_ids
                );
            }
            CompletionOutcome::AlreadyFinished => {
                txn.rollback().await?;
                tracing::info!("Training {} was already finished", training_id);
            }
        }

        Ok(outcome)
    }
}

async fn evaluate<C: ConnectionTrait>(
    conn: &C,
    training_id: i32,
) -> Result<CompletionOutcome, AppError> {
    let training = TrainingRepository::new(conn)
        .get_by_id(training_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Formation #{} introuvable.", training_id)))?;

    if training.is_finished {
        return Ok(CompletionOutcome::AlreadyFinished);
    }

    let exams = ExamRepository::new(conn)
        .get_with_results_by_training_id(training_id)
        .await?;

    let missing: Vec<i32> = exams
        .iter()
        .filter(|exam| exam.results.is_empty())
        .map(|exam| exam.exam.id)
        .collect();
    if !missing.is_empty() {
        return Ok(CompletionOutcome::MissingResults { exam_ids: missing });
    }

    if !TrainingRepository::new(conn).mark_finished(training_id).await? {
        return Ok(CompletionOutcome::AlreadyFinished);
    }

    let students = StudentRepository::new(conn)
        .get_by_training_id(training_id, Some(StudentStatus::Validated))
        .await?;

    let summaries = summarize(training_id, exams, students);

    let notifications = summaries
        .iter()
        .map(|summary| -> Result<CreateTrainingNotificationParams, AppError> {
            Ok(CreateTrainingNotificationParams {
                training_id,
                student_id: summary.student_id,
                recipient: summary.email.clone(),
                subject: RESULTS_SUBJECT.to_string(),
                payload: serde_json::to_string(summary)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    TrainingNotificationRepository::new(conn)
        .create_many(notifications)
        .await?;

    AdminNotificationRepository::new(conn)
        .create(CreateAdminNotificationParams {
            training_id: Some(training_id),
            title: COMPLETION_TITLE.to_string(),
            message: format!(
                "La formation « {} » est terminée : {} étudiant(s) notifié(s).",
                training.title,
                summaries.len()
            ),
        })
        .await?;

    Ok(CompletionOutcome::Finished { summaries })
}

/// Builds the result summary of every student from the training's exams and results.
fn summarize(
    training_id: i32,
    exams: Vec<ExamWithResults>,
    students: Vec<Student>,
) -> Vec<StudentResultSummary> {
    let (exams, results): (Vec<Exam>, Vec<Vec<ExamResult>>) = exams
        .into_iter()
        .map(|exam| (exam.exam, exam.results))
        .unzip();
    let results: Vec<ExamResult> = results.into_iter().flatten().collect();
    let last_two = verdict::last_two_exam_ids(&exams);

    students
        .into_iter()
        .map(|student| {
            let student_results = verdict::results_for_student(student.id, &results);
            StudentResultSummary {
                training_id,
                student_id: student.id,
                first_name: student.first_name,
                last_name: student.last_name,
                email: student.email,
                final_result: verdict::final_verdict(&last_two, &student_results),
                results: student_results,
            }
        })
        .collect()
}
