use super::*;

/// Tests replacing the fields of a course.
///
/// Expected: Ok(Course) with the new values and the file reference cleared
#[tokio::test]
async fn replaces_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::CourseFactory::new(db)
        .file_path("courses/code.pdf")
        .build()
        .await?;

    let updated = CourseRepository::new(db)
        .update(
            course.id,
            CourseParams {
                name: "Éco-conduite".to_string(),
                course_type: CourseType::Specific,
                file_path: None,
            },
        )
        .await?;

    assert_eq!(updated.id, course.id);
    assert_eq!(updated.name, "Éco-conduite");
    assert_eq!(updated.course_type, CourseType::Specific);
    assert!(updated.file_path.is_none());

    Ok(())
}

/// Tests updating a course that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CourseRepository::new(db)
        .update(
            12,
            CourseParams {
                name: "Inconnu".to_string(),
                course_type: CourseType::Common,
                file_path: None,
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
