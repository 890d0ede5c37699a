use std::collections::HashSet;
use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};
use sea_orm::{sea_query::Expr, EntityTrait};

use super::*;

/// Tests a slow dispatch overlapping with a retry pass over the same rows.
///
/// The pending rows are old enough for the retry to select them while the dispatch
/// started by the finish request is still sending. Each row must reach the mailer
/// exactly once.
///
/// Expected: 3 mails in total, one per student, and every row sent after one attempt
#[tokio::test]
async fn dispatch_and_retry_send_each_mail_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (training_id, students) = finish_training_with_students(db, 3).await?;

    entity::prelude::TrainingNotification::update_many()
        .col_expr(
            entity::training_notification::Column::CreatedAt,
            Expr::value(Utc::now() - Duration::minutes(20)),
        )
        .exec(db)
        .await?;

    let mailer = RecordingMailer::new().with_delay(StdDuration::from_millis(50));
    let dispatcher = NotificationDispatcher::new(db, &mailer);

    let (dispatched, retried) = tokio::join!(
        dispatcher.dispatch_pending(training_id),
        dispatcher.retry_failed()
    );
    let (dispatched, retried) = (dispatched?, retried?);

    assert_eq!(dispatched.sent + retried.sent, 3);
    assert_eq!(dispatched.failed + retried.failed, 0);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 3);
    let recipients: HashSet<String> = sent.into_iter().map(|m| m.to).collect();
    let expected: HashSet<String> = students.into_iter().map(|s| s.email).collect();
    assert_eq!(recipients, expected);

    let rows = TrainingNotificationRepository::new(db)
        .get_by_training_id(training_id)
        .await?;
    assert!(rows
        .iter()
        .all(|row| row.status == NotificationStatus::Sent && row.attempts == 1));

    Ok(())
}

/// Tests two overlapping retry passes over the same failed row.
///
/// Expected: the failed student receives a single mail
#[tokio::test]
async fn overlapping_retries_send_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (training_id, students) = finish_training_with_students(db, 1).await?;

    let flaky = RecordingMailer::new().failing_for(students[0].email.clone());
    NotificationDispatcher::new(db, &flaky)
        .dispatch_pending(training_id)
        .await?;

    let mailer = RecordingMailer::new().with_delay(StdDuration::from_millis(50));
    let dispatcher = NotificationDispatcher::new(db, &mailer);

    let (first, second) = tokio::join!(dispatcher.retry_failed(), dispatcher.retry_failed());
    let (first, second) = (first?, second?);

    assert_eq!(first.sent + second.sent, 1);
    assert_eq!(mailer.sent().len(), 1);

    let rows = TrainingNotificationRepository::new(db)
        .get_by_training_id(training_id)
        .await?;
    assert_eq!(rows[0].status, NotificationStatus::Sent);
    assert_eq!(rows[0].attempts, 2);

    Ok(())
}
