use super::*;

/// Tests listing courses with and without a type filter.
///
/// Expected: every course without a filter, only specific ones with it
#[tokio::test]
async fn filters_by_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let code = factory::create_course(db).await?;
    let night = factory::course::CourseFactory::new(db)
        .name("Conduite de nuit")
        .course_type("specific")
        .build()
        .await?;

    let repo = CourseRepository::new(db);

    let all = repo.get_all(None).await?;
    assert_eq!(
        all.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![code.id, night.id]
    );

    let specific = repo.get_all(Some(CourseType::Specific)).await?;
    assert_eq!(specific.len(), 1);
    assert_eq!(specific[0].name, "Conduite de nuit");
    assert_eq!(specific[0].course_type, CourseType::Specific);

    Ok(())
}

/// Tests reading a row whose type is not a known value.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_unknown_stored_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::course::CourseFactory::new(db)
        .course_type("optional")
        .build()
        .await?;

    let result = CourseRepository::new(db).get_all(None).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
