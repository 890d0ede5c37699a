use super::*;

/// Tests adding an entry to the feed.
///
/// Expected: Ok(AdminNotification) unread and linked to the training
#[tokio::test]
async fn creates_unread_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_dependencies(db).await?;

    let entry = AdminNotificationRepository::new(db)
        .create(CreateAdminNotificationParams {
            training_id: Some(training.id),
            title: "Nouvelle inscription".to_string(),
            message: "Camille Martin demande à rejoindre la formation.".to_string(),
        })
        .await?;

    assert!(!entry.is_read);
    assert_eq!(entry.training_id, Some(training.id));
    assert_eq!(entry.title, "Nouvelle inscription");

    Ok(())
}

/// Tests that deleting a training keeps its feed entries.
///
/// Expected: the entry survives with no training
#[tokio::test]
async fn training_deletion_clears_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_dependencies(db).await?;
    let entry = factory::admin_notification::AdminNotificationFactory::new(db)
        .training_id(training.id)
        .build()
        .await?;

    crate::server::data::training::TrainingRepository::new(db)
        .delete(training.id)
        .await?;

    let stored = AdminNotificationRepository::new(db)
        .get_by_id(entry.id)
        .await?
        .unwrap();
    assert!(stored.training_id.is_none());

    Ok(())
}
