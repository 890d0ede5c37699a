use super::*;

/// Tests finishing a training where every exam has results.
///
/// Verifies that the training is flipped to finished, that only validated students are
/// summarized, in enrollment order, with their results ordered by exam ID, and that one
/// pending notification carrying the summary is queued per student.
///
/// Expected: Ok(Finished) with two summaries and two queued notifications
#[tokio::test]
async fn finishes_and_queues_one_notification_per_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (training, [code, driving]) =
        factory::helpers::create_training_with_default_exams(db).await?;
    let alice = factory::create_validated_student(db, training.id).await?;
    let bob = factory::create_validated_student(db, training.id).await?;
    let pending = factory::student::StudentFactory::new(db)
        .training_id(training.id)
        .build()
        .await?;

    factory::create_result(db, driving.id, alice.id, 12.0).await?;
    factory::create_result(db, code.id, alice.id, 14.0).await?;
    factory::create_result(db, code.id, bob.id, 8.0).await?;
    factory::create_result(db, code.id, pending.id, 11.0).await?;

    let outcome = CompletionService::new(db)
        .evaluate_and_finish(training.id)
        .await?;

    let summaries = match outcome {
        CompletionOutcome::Finished { summaries } => summaries,
        other => panic!("expected Finished, got {:?}", other),
    };

    assert_eq!(
        summaries.iter().map(|s| s.student_id).collect::<Vec<_>>(),
        vec![alice.id, bob.id]
    );
    assert_eq!(
        summaries[0]
            .results
            .iter()
            .map(|r| (r.exam_id, r.score))
            .collect::<Vec<_>>(),
        vec![(code.id, 14.0), (driving.id, 12.0)]
    );
    assert_eq!(summaries[0].final_result, FinalVerdict::Passed);
    assert_eq!(summaries[1].results.len(), 1);
    assert_eq!(summaries[1].final_result, FinalVerdict::Failed);

    let stored = TrainingRepository::new(db)
        .get_by_id(training.id)
        .await?
        .unwrap();
    assert!(stored.is_finished);

    let queued = TrainingNotificationRepository::new(db)
        .get_pending_by_training_id(training.id)
        .await?;
    assert_eq!(queued.len(), 2);
    assert_eq!(queued[0].recipient, alice.email);
    assert_eq!(queued[0].subject, "Résultats de votre formation");
    let payload: StudentResultSummary = serde_json::from_str(&queued[0].payload)?;
    assert_eq!(payload, summaries[0]);

    let feed = AdminNotificationRepository::new(db).get_all().await?;
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].title, COMPLETION_TITLE);
    assert_eq!(feed[0].training_id, Some(training.id));
    assert!(feed[0].message.contains("2 étudiant(s) notifié(s)"));

    Ok(())
}

/// Tests the final verdict with three dated exams.
///
/// Verifies that only the two most recent exams decide the verdict: a student who
/// failed the oldest exam but passed the two latest passes, a student who failed the
/// latest exam fails, and a student without a result for the second most recent exam
/// fails.
///
/// Expected: Passed for the first student, Failed for the others
#[tokio::test]
async fn verdict_uses_two_most_recent_exams() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_dependencies(db).await?;
    let march = factory::exam::create_exam_on(
        db,
        training.id,
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
    )
    .await?;
    let january = factory::exam::create_exam_on(
        db,
        training.id,
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
    )
    .await?;
    let february = factory::exam::create_exam_on(
        db,
        training.id,
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
    )
    .await?;

    let recovers = factory::create_validated_student(db, training.id).await?;
    let slips = factory::create_validated_student(db, training.id).await?;
    let skipped = factory::create_validated_student(db, training.id).await?;

    factory::create_result(db, january.id, recovers.id, 5.0).await?;
    factory::create_result(db, february.id, recovers.id, 12.0).await?;
    factory::create_result(db, march.id, recovers.id, 15.0).await?;

    factory::create_result(db, january.id, slips.id, 18.0).await?;
    factory::create_result(db, february.id, slips.id, 17.0).await?;
    factory::create_result(db, march.id, slips.id, 9.99).await?;

    factory::create_result(db, january.id, skipped.id, 16.0).await?;
    factory::create_result(db, march.id, skipped.id, 16.0).await?;

    let outcome = CompletionService::new(db)
        .evaluate_and_finish(training.id)
        .await?;

    let CompletionOutcome::Finished { summaries } = outcome else {
        panic!("expected Finished, got {:?}", outcome);
    };
    assert_eq!(summaries[0].final_result, FinalVerdict::Passed);
    assert_eq!(summaries[1].final_result, FinalVerdict::Failed);
    assert_eq!(summaries[2].results.len(), 2);
    assert_eq!(summaries[2].final_result, FinalVerdict::Failed);

    Ok(())
}

/// Tests finishing a training with no validated students.
///
/// Expected: Ok(Finished) with no summaries and no notifications
#[tokio::test]
async fn finishes_without_students() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (training, [code, driving]) =
        factory::helpers::create_training_with_default_exams(db).await?;
    let rejected = factory::student::StudentFactory::new(db)
        .training_id(training.id)
        .status("rejected")
        .build()
        .await?;
    factory::create_result(db, code.id, rejected.id, 12.0).await?;
    factory::create_result(db, driving.id, rejected.id, 12.0).await?;

    let outcome = CompletionService::new(db)
        .evaluate_and_finish(training.id)
        .await?;

    assert_eq!(
        outcome,
        CompletionOutcome::Finished {
            summaries: Vec::new()
        }
    );
    assert!(TrainingNotificationRepository::new(db)
        .get_by_training_id(training.id)
        .await?
        .is_empty());

    Ok(())
}
