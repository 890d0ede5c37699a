use super::*;

/// Tests recording a failed and then a successful delivery.
///
/// Verifies that each attempt is counted, that the error text is kept on failure
/// and cleared once the mail is sent, and that `sent_at` is only set on success.
///
/// Expected: Ok with attempts = 2 and status sent
#[tokio::test]
async fn counts_attempts_and_keeps_last_error() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_dependencies(db).await?;
    let alice = factory::create_validated_student(db, training.id).await?;
    queue(db, training.id, &[&alice]).await?;

    let repo = TrainingNotificationRepository::new(db);
    let id = repo.get_by_training_id(training.id).await?[0].id;

    repo.mark_failed(id, "connection refused").await?;
    let failed = repo.get_by_training_id(training.id).await?.remove(0);
    assert_eq!(failed.status, NotificationStatus::Failed);
    assert_eq!(failed.attempts, 1);
    assert_eq!(failed.last_error.as_deref(), Some("connection refused"));
    assert!(failed.sent_at.is_none());

    repo.mark_sent(id).await?;
    let sent = repo.get_by_training_id(training.id).await?.remove(0);
    assert_eq!(sent.status, NotificationStatus::Sent);
    assert_eq!(sent.attempts, 2);
    assert!(sent.last_error.is_none());
    assert!(sent.sent_at.is_some());

    Ok(())
}

/// Tests recording an attempt for a row that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrainingNotificationRepository::new(db);
    let result = repo.mark_sent(5).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
