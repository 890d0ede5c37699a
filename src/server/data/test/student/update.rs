use super::*;

/// Tests replacing the editable fields of a student.
///
/// Verifies that the registration status is left as it was.
///
/// Expected: Ok(Student) with the new fields and the same status
#[tokio::test]
async fn replaces_fields_and_keeps_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_dependencies(db).await?;
    let student = factory::create_validated_student(db, training.id).await?;

    let updated = StudentRepository::new(db)
        .update(UpdateStudentParams {
            id: student.id,
            first_name: "Inès".to_string(),
            last_name: "Lefèvre".to_string(),
            email: "ines.lefevre@example.com".to_string(),
            phone: Some("0601020304".to_string()),
            training_id: None,
        })
        .await?;

    assert_eq!(updated.first_name, "Inès");
    assert_eq!(updated.email, "ines.lefevre@example.com");
    assert_eq!(updated.phone.as_deref(), Some("0601020304"));
    assert!(updated.training_id.is_none());
    assert_eq!(updated.status, StudentStatus::Validated);

    Ok(())
}

/// Tests the email check used when editing a student.
///
/// Expected: the student's own email is free, another student's is not
#[tokio::test]
async fn email_used_by_other_ignores_self() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::StudentFactory::new(db)
        .email("lea@example.com")
        .build()
        .await?;
    let other = factory::student::StudentFactory::new(db)
        .email("hugo@example.com")
        .build()
        .await?;

    let repo = StudentRepository::new(db);

    assert!(!repo.email_used_by_other("lea@example.com", student.id).await?);
    assert!(repo.email_used_by_other("hugo@example.com", student.id).await?);
    assert!(repo.email_used_by_other("lea@example.com", other.id).await?);

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentRepository::new(db)
        .update(UpdateStudentParams {
            id: 77,
            first_name: "Nobody".to_string(),
            last_name: "Here".to_string(),
            email: "nobody@example.com".to_string(),
            phone: None,
            training_id: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
