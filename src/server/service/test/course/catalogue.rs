use super::*;

/// Tests creating, editing and deleting a course.
///
/// Expected: the course is listed after creation, carries the new values after the
/// update, and is gone after the deletion
#[tokio::test]
async fn create_update_delete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CourseService::new(db);

    let created = service
        .create(course_params("Conduite sur autoroute", CourseType::Common))
        .await?;
    assert_eq!(service.get_all().await?, vec![created.clone()]);
    assert!(service.get_specific().await?.is_empty());

    let updated = service
        .update(
            created.id,
            CourseParams {
                name: "Conduite sur autoroute de nuit".to_string(),
                course_type: CourseType::Specific,
                file_path: Some("courses/autoroute.pdf".to_string()),
            },
        )
        .await?;
    assert_eq!(updated.course_type, CourseType::Specific);
    assert_eq!(updated.file_path.as_deref(), Some("courses/autoroute.pdf"));
    assert_eq!(service.get_specific().await?, vec![updated]);

    service.delete(created.id).await?;
    assert!(matches!(
        service.get_by_id(created.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests editing and deleting a course that does not exist.
///
/// Expected: Err(AppError::NotFound) for both
#[tokio::test]
async fn missing_course_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CourseService::new(db);

    assert!(matches!(
        service
            .update(42, course_params("Inconnu", CourseType::Common))
            .await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(service.delete(42).await, Err(AppError::NotFound(_))));

    Ok(())
}
