//! Links between trainings and the courses they teach.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct TrainingCourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainingCourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn is_attached(&self, training_id: i32, course_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::TrainingCourse::find()
            .filter(entity::training_course::Column::TrainingId.eq(training_id))
            .filter(entity::training_course::Column::CourseId.eq(course_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Links a course to a training
    ///
    /// # Returns
    /// - `Ok(())` - Link created
    /// - `Err(DbErr)` - Database error, including the unique (training, course) key
    pub async fn attach(&self, training_id: i32, course_id: i32) -> Result<(), DbErr> {
        entity::training_course::ActiveModel {
            training_id: ActiveValue::Set(training_id),
            course_id: ActiveValue::Set(course_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes the link between a course and a training
    ///
    /// # Returns
    /// - `Ok(true)` - Link removed
    /// - `Ok(false)` - The course was not linked to the training
    pub async fn detach(&self, training_id: i32, course_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TrainingCourse::delete_many()
            .filter(entity::training_course::Column::TrainingId.eq(training_id))
            .filter(entity::training_course::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
