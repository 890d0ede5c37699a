use super::*;

/// Tests claiming a pending row twice from the same snapshot.
///
/// Verifies that only the first claim wins and that the row is left in `sending`
/// without counting an attempt.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn only_first_claim_wins() -> Result<(), DbErr> {
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
    let snapshot = repo.get_by_training_id(training.id).await?.remove(0);

    assert!(repo.claim(&snapshot).await?);
    assert!(!repo.claim(&snapshot).await?);

    let claimed = repo.get_by_training_id(training.id).await?.remove(0);
    assert_eq!(claimed.status, NotificationStatus::Sending);
    assert_eq!(claimed.attempts, 0);

    Ok(())
}

/// Tests claiming from a snapshot taken before the row was delivered.
///
/// Expected: Ok(false) and the row stays sent
#[tokio::test]
async fn stale_snapshot_cannot_claim() -> Result<(), DbErr> {
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
    let snapshot = repo.get_by_training_id(training.id).await?.remove(0);
    repo.mark_sent(snapshot.id).await?;

    assert!(!repo.claim(&snapshot).await?);

    let row = repo.get_by_training_id(training.id).await?.remove(0);
    assert_eq!(row.status, NotificationStatus::Sent);

    Ok(())
}

/// Tests that claimed rows are not offered for retry.
///
/// Expected: Ok(empty) even with a cutoff after the row's creation
#[tokio::test]
async fn claimed_row_is_not_retryable() -> Result<(), DbErr> {
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
    let snapshot = repo.get_by_training_id(training.id).await?.remove(0);
    repo.claim(&snapshot).await?;

    let selected = repo
        .get_retryable(3, Utc::now() + Duration::minutes(1))
        .await?;

    assert!(selected.is_empty());

    Ok(())
}
