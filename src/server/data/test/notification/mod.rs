use crate::server::{
    data::notification::TrainingNotificationRepository,
    model::notification::{CreateTrainingNotificationParams, NotificationStatus},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod claim;
mod record_attempt;

/// Queues one notification per student for the training.
async fn queue(
    db: &sea_orm::DatabaseConnection,
    training_id: i32,
    students: &[&entity::student::Model],
) -> Result<(), DbErr> {
    TrainingNotificationRepository::new(db)
        .create_many(
            students
                .iter()
                .map(|student| CreateTrainingNotificationParams {
                    training_id,
                    student_id: student.id,
                    recipient: student.email.clone(),
                    subject: "Résultats de votre formation".to_string(),
                    payload: "{}".to_string(),
                })
                .collect(),
        )
        .await
}
