use super::*;

/// Tests editing the exams of an unfinished training.
///
/// Expected: create and update succeed
#[tokio::test]
async fn edits_exams_of_open_training() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_dependencies(db).await?;
    let service = ExamService::new(db);

    let exam = service
        .create(CreateExamParams {
            training_id: training.id,
            name: "Code blanc".to_string(),
            exam_type: ExamType::Theory,
            date: None,
        })
        .await?;
    let date = NaiveDate::from_ymd_opt(2025, 9, 15);
    let updated = service
        .update(UpdateExamParams {
            id: exam.id,
            name: "Code final".to_string(),
            exam_type: ExamType::Theory,
            date,
        })
        .await?;

    assert_eq!(updated.name, "Code final");
    assert_eq!(updated.date, date);

    Ok(())
}

/// Tests editing the exams of a finished training.
///
/// Verifies that adding, updating and deleting exams are all refused.
///
/// Expected: Err(AppError::Conflict) for each operation
#[tokio::test]
async fn refuses_changes_once_finished() -> Result<(), AppError> {
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
    let exam = factory::create_exam(db, training.id).await?;
    let service = ExamService::new(db);

    let created = service
        .create(CreateExamParams {
            training_id: training.id,
            name: "Rattrapage".to_string(),
            exam_type: ExamType::Practical,
            date: None,
        })
        .await;
    let updated = service
        .update(UpdateExamParams {
            id: exam.id,
            name: "Renommé".to_string(),
            exam_type: ExamType::Theory,
            date: None,
        })
        .await;
    let deleted = service.delete(exam.id).await;

    assert!(matches!(created, Err(AppError::Conflict(_))));
    assert!(matches!(updated, Err(AppError::Conflict(_))));
    assert!(matches!(deleted, Err(AppError::Conflict(_))));
    assert_eq!(service.get_by_training_id(training.id).await?.len(), 1);

    Ok(())
}

/// Tests adding an exam to an unknown training.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_training() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ExamService::new(db)
        .create(CreateExamParams {
            training_id: 9,
            name: "Code".to_string(),
            exam_type: ExamType::Theory,
            date: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
