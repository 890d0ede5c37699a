use super::*;

/// Tests creating an exam.
///
/// Verifies that the exam type round-trips through its stored label and that an
/// exam may be created without a date.
///
/// Expected: Ok with a practical, undated exam
#[tokio::test]
async fn creates_undated_exam() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_dependencies(db).await?;

    let repo = ExamRepository::new(db);
    let exam = repo
        .create(CreateExamParams {
            training_id: training.id,
            name: "Conduite".to_string(),
            exam_type: ExamType::Practical,
            date: None,
        })
        .await?;

    assert_eq!(exam.training_id, training.id);
    assert_eq!(exam.exam_type, ExamType::Practical);
    assert!(exam.date.is_none());

    let stored = repo.get_by_id(exam.id).await?.unwrap();
    assert_eq!(stored, exam);

    Ok(())
}

/// Tests reading an exam whose stored type is not a known label.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_dependencies(db).await?;
    let exam = factory::exam::ExamFactory::new(db, training.id)
        .exam_type("Oral")
        .build()
        .await?;

    let repo = ExamRepository::new(db);
    let result = repo.get_by_id(exam.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
