use super::*;

/// Tests registering a student for a training.
///
/// Expected: Ok(Student) pending review
#[tokio::test]
async fn registers_pending_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_dependencies(db).await?;

    let student = StudentService::new(db)
        .register(register_params("camille@example.com", Some(training.id)))
        .await?;

    assert_eq!(student.status, StudentStatus::Pending);
    assert_eq!(student.training_id, Some(training.id));

    let feed = AdminNotificationRepository::new(db).get_all().await?;
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].title, REGISTRATION_TITLE);
    assert_eq!(feed[0].training_id, Some(training.id));
    assert!(!feed[0].is_read);
    assert_eq!(
        feed[0].message,
        format!(
            "Camille Martin demande à rejoindre la formation « {} ».",
            training.title
        )
    );

    Ok(())
}

/// Tests registering with an email that is already used.
///
/// Expected: Err(AppError::ValidationErr) on email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_student(db).await?;

    let result = StudentService::new(db)
        .register(register_params(&existing.email, None))
        .await;

    match result {
        Err(AppError::ValidationErr(e)) => assert!(e.fields.contains_key("email")),
        other => panic!("expected a validation error, got {:?}", other),
    }

    Ok(())
}

/// Tests registering for an unknown training.
///
/// Expected: Err(AppError::ValidationErr) on training_id
#[tokio::test]
async fn rejects_unknown_training() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentService::new(db)
        .register(register_params("nobody@example.com", Some(3)))
        .await;

    match result {
        Err(AppError::ValidationErr(e)) => assert!(e.fields.contains_key("training_id")),
        other => panic!("expected a validation error, got {:?}", other),
    }
    assert!(AdminNotificationRepository::new(db).get_all().await?.is_empty());

    Ok(())
}

/// Tests registering without choosing a training.
///
/// Expected: Ok(Student) and a feed entry with no training
#[tokio::test]
async fn registers_without_training() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = StudentService::new(db)
        .register(register_params("camille.solo@example.com", None))
        .await?;

    assert!(student.training_id.is_none());

    let feed = AdminNotificationRepository::new(db).get_all().await?;
    assert_eq!(feed.len(), 1);
    assert!(feed[0].training_id.is_none());
    assert_eq!(
        feed[0].message,
        "Camille Martin s'est inscrit sans choisir de formation."
    );

    Ok(())
}
