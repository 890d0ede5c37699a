use super::*;

/// Tests updating the name, type and date of an exam.
///
/// Expected: Ok with the new values
#[tokio::test]
async fn updates_exam() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, [code, _]) = factory::helpers::create_training_with_default_exams(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 6, 12).unwrap();

    let repo = ExamRepository::new(db);
    let updated = repo
        .update(UpdateExamParams {
            id: code.id,
            name: "Code blanc".to_string(),
            exam_type: ExamType::Theory,
            date: Some(date),
        })
        .await?;

    assert_eq!(updated.name, "Code blanc");
    assert_eq!(updated.date, Some(date));
    assert_eq!(updated.training_id, code.training_id);

    Ok(())
}

/// Tests updating an exam that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_exam() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ExamRepository::new(db);
    let result = repo
        .update(UpdateExamParams {
            id: 31,
            name: "Code".to_string(),
            exam_type: ExamType::Theory,
            date: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
