use super::*;

/// Tests saving a score twice for the same student and exam.
///
/// Verifies that the second save replaces the first one and recomputes `passed`.
///
/// Expected: one result with score 14 and passed
#[tokio::test]
async fn replaces_existing_score() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_dependencies(db).await?;
    let exam = factory::create_exam(db, training.id).await?;
    let student = factory::create_validated_student(db, training.id).await?;

    let service = ResultService::new(db);
    let first = service
        .save(SaveResultParams {
            exam_id: exam.id,
            student_id: student.id,
            score: 8.0,
        })
        .await?;
    let second = service
        .save(SaveResultParams {
            exam_id: exam.id,
            student_id: student.id,
            score: 14.0,
        })
        .await?;

    assert!(!first.passed);
    assert_eq!(second.id, first.id);
    assert_eq!(second.score, 14.0);
    assert!(second.passed);
    assert_eq!(service.get_by_exam_id(exam.id).await?.len(), 1);

    Ok(())
}

/// Tests the pass mark boundary.
///
/// Expected: 10 passes, 9.99 fails
#[tokio::test]
async fn pass_mark_is_ten() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_dependencies(db).await?;
    let exam = factory::create_exam(db, training.id).await?;
    let on_mark = factory::create_validated_student(db, training.id).await?;
    let below = factory::create_validated_student(db, training.id).await?;

    let service = ResultService::new(db);
    let passed = service
        .save(SaveResultParams {
            exam_id: exam.id,
            student_id: on_mark.id,
            score: 10.0,
        })
        .await?;
    let failed = service
        .save(SaveResultParams {
            exam_id: exam.id,
            student_id: below.id,
            score: 9.99,
        })
        .await?;

    assert!(passed.passed);
    assert!(!failed.passed);

    Ok(())
}

/// Tests rejecting scores outside 0 to 20.
///
/// Expected: Err(AppError::ValidationErr) on the score field, nothing stored
#[tokio::test]
async fn rejects_out_of_range_score() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_dependencies(db).await?;
    let exam = factory::create_exam(db, training.id).await?;
    let student = factory::create_validated_student(db, training.id).await?;

    let service = ResultService::new(db);
    for score in [-0.5, 20.5, f64::NAN] {
        let result = service
            .save(SaveResultParams {
                exam_id: exam.id,
                student_id: student.id,
                score,
            })
            .await;

        match result {
            Err(AppError::ValidationErr(e)) => assert!(e.fields.contains_key("score")),
            other => panic!("expected a score validation error, got {:?}", other),
        }
    }

    assert!(service.get_by_exam_id(exam.id).await?.is_empty());

    Ok(())
}

/// Tests saving a score for an unknown exam or student.
///
/// Expected: NotFound for the exam, a validation error for the student
#[tokio::test]
async fn rejects_unknown_exam_and_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_dependencies(db).await?;
    let exam = factory::create_exam(db, training.id).await?;
    let student = factory::create_validated_student(db, training.id).await?;

    let service = ResultService::new(db);
    let unknown_exam = service
        .save(SaveResultParams {
            exam_id: exam.id + 100,
            student_id: student.id,
            score: 12.0,
        })
        .await;
    let unknown_student = service
        .save(SaveResultParams {
            exam_id: exam.id,
            student_id: student.id + 100,
            score: 12.0,
        })
        .await;

    assert!(matches!(unknown_exam, Err(AppError::NotFound(_))));
    match unknown_student {
        Err(AppError::ValidationErr(e)) => assert!(e.fields.contains_key("student_id")),
        other => panic!("expected a student validation error, got {:?}", other),
    }

    Ok(())
}
