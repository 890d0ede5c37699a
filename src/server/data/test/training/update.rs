use super::*;

/// Tests replacing the editable fields of a training.
///
/// Expected: Ok with the new values persisted
#[tokio::test]
async fn updates_training_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, training) = factory::helpers::create_training_with_dependencies(db).await?;
    let today = Utc::now().date_naive();

    let repo = TrainingRepository::new(db);
    let updated = repo
        .update(UpdateTrainingParams {
            id: training.id,
            title: "Permis moto".to_string(),
            description: "Formation A2 complète".to_string(),
            start_date: today + Duration::days(60),
            registration_end_date: today + Duration::days(50),
            duration_weeks: 10,
            price: 1200.0,
            category_id: category.id,
            schedule: None,
            covering: Some("covers/moto.png".to_string()),
        })
        .await?;

    assert_eq!(updated.id, training.id);
    assert_eq!(updated.title, "Permis moto");
    assert_eq!(updated.price, 1200.0);
    assert_eq!(updated.covering.as_deref(), Some("covers/moto.png"));
    assert!(!updated.is_finished);

    Ok(())
}

/// Tests updating a training that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_training() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let today = Utc::now().date_naive();

    let repo = TrainingRepository::new(db);
    let result = repo
        .update(UpdateTrainingParams {
            id: 999,
            title: "Inconnue".to_string(),
            description: "Aucune formation".to_string(),
            start_date: today,
            registration_end_date: today,
            duration_weeks: 1,
            price: 0.0,
            category_id: category.id,
            schedule: None,
            covering: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
