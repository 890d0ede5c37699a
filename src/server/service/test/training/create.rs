use super::*;

/// Tests creating a training.
///
/// Verifies that the training is returned with its category, starts unfinished and
/// receives the "Code" and "Conduite" exams.
///
/// Expected: Ok(Training) with two default exams
#[tokio::test]
async fn creates_training_with_default_exams() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let training = TrainingService::new(db)
        .create(create_params(category.id), today())
        .await?;

    assert_eq!(training.title, "Permis B accéléré");
    assert!(!training.is_finished);
    assert_eq!(training.category.unwrap().name, category.name);

    let exams = ExamRepository::new(db)
        .get_by_training_id(training.id)
        .await?;
    assert_eq!(
        exams
            .iter()
            .map(|e| (e.name.as_str(), e.exam_type))
            .collect::<Vec<_>>(),
        vec![("Code", ExamType::Theory), ("Conduite", ExamType::Practical)]
    );
    assert!(exams.iter().all(|e| e.date.is_none()));

    Ok(())
}

/// Tests creating a training with past dates and an unknown category.
///
/// Verifies that every problem is reported at once and nothing is created.
///
/// Expected: Err(AppError::ValidationErr) with three fields
#[tokio::test]
async fn reports_every_invalid_field() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = create_params(42);
    params.start_date = today() - Duration::days(1);
    params.registration_end_date = today() - Duration::days(3);

    let service = TrainingService::new(db);
    let result = service.create(params, today()).await;

    match result {
        Err(AppError::ValidationErr(e)) => assert_eq!(
            e.fields.keys().cloned().collect::<Vec<_>>(),
            vec!["category_id", "registration_end_date", "start_date"]
        ),
        other => panic!("expected a validation error, got {:?}", other),
    }
    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests that a training may start on the reference day itself.
///
/// Expected: Ok(Training)
#[tokio::test]
async fn accepts_dates_of_today() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let mut params = create_params(category.id);
    params.start_date = today();
    params.registration_end_date = today();

    let result = TrainingService::new(db).create(params, today()).await;

    assert!(result.is_ok());

    Ok(())
}
