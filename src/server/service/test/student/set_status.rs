use super::*;

/// Tests approving then rejecting a student.
///
/// Expected: status follows each decision
#[tokio::test]
async fn approve_and_reject() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let service = StudentService::new(db);

    assert_eq!(
        service.approve(student.id).await?.status,
        StudentStatus::Validated
    );
    assert_eq!(
        service.reject(student.id).await?.status,
        StudentStatus::Rejected
    );

    Ok(())
}

/// Tests approving an unknown student.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentService::new(db).approve(11).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
