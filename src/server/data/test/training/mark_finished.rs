use super::*;

/// Tests the unfinished to finished transition.
///
/// Verifies that the first call flips the flag and reports it, and that the
/// stored training is finished afterwards.
///
/// Expected: Ok(true)
#[tokio::test]
async fn marks_unfinished_training() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_dependencies(db).await?;

    let repo = TrainingRepository::new(db);
    assert!(repo.mark_finished(training.id).await?);

    let stored = repo.get_by_id(training.id).await?.unwrap();
    assert!(stored.is_finished);

    Ok(())
}

/// Tests marking a training that is already finished.
///
/// Verifies that the conditional update reports no transition so callers can
/// treat the request as a no-op.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_no_transition_when_already_finished() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let training = factory::training::TrainingFactory::new(db, category.id)
        .finished(true)
        .build()
        .await?;

    let repo = TrainingRepository::new(db);
    assert!(!repo.mark_finished(training.id).await?);

    Ok(())
}

/// Tests marking a training that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_no_transition_for_missing_training() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrainingRepository::new(db);
    assert!(!repo.mark_finished(42).await?);

    Ok(())
}
