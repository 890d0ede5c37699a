use super::*;

/// Tests finishing the same training twice.
///
/// Verifies that the second call is a no-op: it reports the training as already
/// finished and does not queue a second notification for any student.
///
/// Expected: Ok(AlreadyFinished) and still one notification per student
#[tokio::test]
async fn second_finish_queues_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (training, [code, driving]) =
        factory::helpers::create_training_with_default_exams(db).await?;
    let student = factory::create_validated_student(db, training.id).await?;
    factory::create_result(db, code.id, student.id, 13.0).await?;
    factory::create_result(db, driving.id, student.id, 11.0).await?;

    let service = CompletionService::new(db);
    let first = service.evaluate_and_finish(training.id).await?;
    let second = service.evaluate_and_finish(training.id).await?;

    assert!(matches!(first, CompletionOutcome::Finished { .. }));
    assert_eq!(second, CompletionOutcome::AlreadyFinished);
    assert_eq!(
        TrainingNotificationRepository::new(db)
            .get_by_training_id(training.id)
            .await?
            .len(),
        1
    );
    assert_eq!(AdminNotificationRepository::new(db).get_all().await?.len(), 1);

    Ok(())
}
