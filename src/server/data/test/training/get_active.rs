use super::*;

/// Tests listing trainings still open for registration.
///
/// Verifies that trainings already started, past their registration deadline or
/// finished are excluded, and that the category is loaded alongside.
///
/// Expected: Ok with only the open training
#[tokio::test]
async fn returns_only_open_trainings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let today = Utc::now().date_naive();
    let category = factory::create_category(db).await?;

    let open = factory::training::TrainingFactory::new(db, category.id)
        .title("Ouverte")
        .build()
        .await?;
    factory::training::TrainingFactory::new(db, category.id)
        .title("Commencée")
        .start_date(today - Duration::days(3))
        .build()
        .await?;
    factory::training::TrainingFactory::new(db, category.id)
        .title("Inscriptions closes")
        .registration_end_date(today - Duration::days(1))
        .build()
        .await?;
    factory::training::TrainingFactory::new(db, category.id)
        .title("Terminée")
        .finished(true)
        .build()
        .await?;

    let repo = TrainingRepository::new(db);
    let active = repo.get_active(today).await?;

    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, open.id);
    assert_eq!(
        active[0].category.as_ref().map(|c| c.id),
        Some(category.id)
    );

    Ok(())
}
