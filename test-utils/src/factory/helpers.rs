//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a category and an unfinished training belonging to it.
///
/// # Returns
/// - `Ok((category, training))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_training_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::category::Model, entity::training::Model), DbErr> {
    let category = crate::factory::category::create_category(db).await?;
    let training = crate::factory::training::create_training(db, category.id).await?;

    Ok((category, training))
}

/// Creates a training with the two default exams a new training receives.
///
/// The exams are named "Code" (Théorique) and "Conduite" (Pratique) and have no date.
///
/// # Returns
/// - `Ok((training, [code_exam, driving_exam]))` - Created training and exams
/// - `Err(DbErr)` - Database error during creation
pub async fn create_training_with_default_exams(
    db: &DatabaseConnection,
) -> Result<(entity::training::Model, [entity::exam::Model; 2]), DbErr> {
    let (_, training) = create_training_with_dependencies(db).await?;

    let code = crate::factory::exam::ExamFactory::new(db, training.id)
        .name("Code")
        .exam_type("Théorique")
        .build()
        .await?;
    let driving = crate::factory::exam::ExamFactory::new(db, training.id)
        .name("Conduite")
        .exam_type("Pratique")
        .build()
        .await?;

    Ok((training, [code, driving]))
}
