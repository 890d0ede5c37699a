use super::*;

/// Tests removing a course from a training.
///
/// Verifies that only the link goes away and the course itself is kept.
///
/// Expected: Ok(true) then Ok(false) on a second attempt
#[tokio::test]
async fn removes_link_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_dependencies(db).await?;
    let course = factory::create_course(db).await?;
    factory::attach_course(db, training.id, course.id).await?;

    let repo = TrainingCourseRepository::new(db);
    assert!(repo.detach(training.id, course.id).await?);
    assert!(!repo.detach(training.id, course.id).await?);

    assert!(CourseRepository::new(db).get_by_id(course.id).await?.is_some());

    Ok(())
}

/// Tests that deleting a course removes it from its trainings.
///
/// Expected: no link left
#[tokio::test]
async fn deleting_course_cascades_to_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_dependencies(db).await?;
    let course = factory::create_course(db).await?;
    factory::attach_course(db, training.id, course.id).await?;

    assert!(CourseRepository::new(db).delete(course.id).await?);

    assert_eq!(entity::prelude::TrainingCourse::find().count(db).await?, 0);

    Ok(())
}
