//! Exam result factory for creating test scores.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a result for the (exam, student) pair.
///
/// `passed` is derived from the score with the school's pass mark of 10/20.
///
/// # Returns
/// - `Ok(entity::exam_result::Model)` - Created result
/// - `Err(DbErr)` - Database error during insert
pub async fn create_result(
    db: &DatabaseConnection,
    exam_id: i32,
    student_id: i32,
    score: f64,
) -> Result<entity::exam_result::Model, DbErr> {
    let now = Utc::now();
    entity::exam_result::ActiveModel {
        id: ActiveValue::NotSet,
        exam_id: ActiveValue::Set(exam_id),
        student_id: ActiveValue::Set(student_id),
        score: ActiveValue::Set(score),
        passed: ActiveValue::Set(score >= 10.0),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
