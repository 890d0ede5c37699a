use super::*;

/// Tests the report with no finished training.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn empty_without_finished_trainings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (training, [code, _]) = factory::helpers::create_training_with_default_exams(db).await?;
    let student = factory::create_validated_student(db, training.id).await?;
    factory::create_result(db, code.id, student.id, 15.0).await?;

    let rows = GlobalResultsService::new(db).compute().await?;

    assert!(rows.is_empty());

    Ok(())
}

/// Tests the report over several finished trainings.
///
/// Verifies that only finished trainings appear, ordered by training ID then student
/// ID, that every enrolled student is listed whatever their status, and that each row
/// only carries results of its own training's exams.
///
/// Expected: three rows in a stable order
#[tokio::test]
async fn lists_every_student_of_finished_trainings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let first = factory::training::TrainingFactory::new(db, category.id)
        .finished(true)
        .build()
        .await?;
    let open = factory::create_training(db, category.id).await?;
    let second = factory::training::TrainingFactory::new(db, category.id)
        .finished(true)
        .build()
        .await?;

    let first_exam = factory::create_exam(db, first.id).await?;
    let open_exam = factory::create_exam(db, open.id).await?;
    let second_exam = factory::create_exam(db, second.id).await?;

    let later = factory::create_validated_student(db, second.id).await?;
    let validated = factory::create_validated_student(db, first.id).await?;
    let pending = factory::student::StudentFactory::new(db)
        .training_id(first.id)
        .build()
        .await?;
    factory::create_validated_student(db, open.id).await?;

    factory::create_result(db, first_exam.id, validated.id, 16.0).await?;
    factory::create_result(db, open_exam.id, validated.id, 3.0).await?;
    factory::create_result(db, second_exam.id, later.id, 4.0).await?;

    let rows = GlobalResultsService::new(db).compute().await?;

    assert_eq!(
        rows.iter()
            .map(|r| (r.training_id, r.student_id))
            .collect::<Vec<_>>(),
        vec![
            (first.id, validated.id),
            (first.id, pending.id),
            (second.id, later.id)
        ]
    );

    assert_eq!(rows[0].training_title, first.title);
    assert_eq!(rows[0].results.len(), 1);
    assert_eq!(rows[0].results[0].exam_id, first_exam.id);
    // A single exam cannot satisfy the two most recent exams rule.
    assert_eq!(rows[0].final_result, FinalVerdict::Failed);

    assert_eq!(rows[1].status, StudentStatus::Pending);
    assert!(rows[1].results.is_empty());

    assert_eq!(rows[2].results[0].score, 4.0);
    assert!(!rows[2].results[0].passed);

    Ok(())
}

/// Tests that the report is stable between calls.
///
/// Expected: two computations return the same rows
#[tokio::test]
async fn repeated_computation_is_identical() -> Result<(), AppError> {
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
    let code = factory::create_exam(db, training.id).await?;
    let driving = factory::create_exam(db, training.id).await?;
    for score in [8.0, 10.0, 17.5] {
        let student = factory::create_validated_student(db, training.id).await?;
        factory::create_result(db, driving.id, student.id, score).await?;
        factory::create_result(db, code.id, student.id, 20.0 - score).await?;
    }

    let service = GlobalResultsService::new(db);
    let first = service.compute().await?;
    let second = service.compute().await?;

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    assert_eq!(first[1].final_result, FinalVerdict::Passed);
    assert_eq!(first[2].final_result, FinalVerdict::Failed);
    assert!(first
        .iter()
        .all(|row| row.results.windows(2).all(|w| w[0].exam_id < w[1].exam_id)));

    Ok(())
}
