use crate::server::{
    data::{notification::TrainingNotificationRepository, training::TrainingRepository},
    error::AppError,
    mail::test::RecordingMailer,
    model::{
        completion::CompletionOutcome,
        notification::{DispatchReport, NotificationStatus},
    },
    service::{
        completion::CompletionService,
        notification::{NotificationDispatcher, MAX_ATTEMPTS},
    },
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod concurrent_delivery;

/// Finishes a training with two exams where every student has passing scores.
async fn finish_training_with_students(
    db: &DatabaseConnection,
    students: usize,
) -> Result<(i32, Vec<entity::student::Model>), AppError> {
    let (training, [code, driving]) =
        factory::helpers::create_training_with_default_exams(db).await?;

    let mut enrolled = Vec::with_capacity(students);
    for _ in 0..students {
        let student = factory::create_validated_student(db, training.id).await?;
        factory::create_result(db, code.id, student.id, 12.0).await?;
        factory::create_result(db, driving.id, student.id, 15.0).await?;
        enrolled.push(student);
    }

    let outcome = CompletionService::new(db)
        .evaluate_and_finish(training.id)
        .await?;
    assert!(matches!(outcome, CompletionOutcome::Finished { .. }));

    Ok((training.id, enrolled))
}
