use super::*;

/// Tests updating a training that already started.
///
/// Verifies that unchanged past dates do not block the update.
///
/// Expected: Ok(Training) with the new title
#[tokio::test]
async fn keeps_unchanged_past_dates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let training = factory::training::TrainingFactory::new(db, category.id)
        .start_date(today() - Duration::days(10))
        .registration_end_date(today() - Duration::days(20))
        .build()
        .await?;

    let updated = TrainingService::new(db)
        .update(update_params(&training), today())
        .await?;

    assert_eq!(updated.title, "Permis B - session d'été");
    assert_eq!(updated.start_date, training.start_date);

    Ok(())
}

/// Tests moving the start date of a training into the past.
///
/// Expected: Err(AppError::ValidationErr) on start_date
#[tokio::test]
async fn rejects_new_past_start_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_dependencies(db).await?;
    let mut params = update_params(&training);
    params.start_date = today() - Duration::days(1);

    let result = TrainingService::new(db).update(params, today()).await;

    match result {
        Err(AppError::ValidationErr(e)) => {
            assert_eq!(e.fields.keys().collect::<Vec<_>>(), vec!["start_date"])
        }
        other => panic!("expected a validation error, got {:?}", other),
    }

    Ok(())
}

/// Tests updating a finished training.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn refuses_finished_training() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let training = factory::training::TrainingFactory::new(db, category.id)
        .finished(true)
        .build()
        .await?;

    let result = TrainingService::new(db)
        .update(update_params(&training), today())
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
