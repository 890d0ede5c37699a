use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::{
    model::course::CourseType,
    server::model::course::{Course, CourseParams},
};

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CourseParams) -> Result<Course, DbErr> {
        let entity = entity::course::ActiveModel {
            name: ActiveValue::Set(params.name),
            course_type: ActiveValue::Set(params.course_type.as_str().to_string()),
            file_path: ActiveValue::Set(params.file_path),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Course::from_entity(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        entity::prelude::Course::find_by_id(id)
            .one(self.db)
            .await?
            .map(Course::from_entity)
            .transpose()
    }

    /// Gets every course, optionally restricted to one type, ordered by ID
    pub async fn get_all(&self, course_type: Option<CourseType>) -> Result<Vec<Course>, DbErr> {
        let mut query = entity::prelude::Course::find();
        if let Some(course_type) = course_type {
            query = query.filter(entity::course::Column::CourseType.eq(course_type.as_str()));
        }

        Self::collect(
            query
                .order_by_asc(entity::course::Column::Id)
                .all(self.db)
                .await?,
        )
    }

    /// Gets the courses linked to a training ordered by ID
    pub async fn get_by_training_id(&self, training_id: i32) -> Result<Vec<Course>, DbErr> {
        Self::collect(
            entity::prelude::Course::find()
                .join(
                    JoinType::InnerJoin,
                    entity::course::Relation::TrainingCourse.def(),
                )
                .filter(entity::training_course::Column::TrainingId.eq(training_id))
                .order_by_asc(entity::course::Column::Id)
                .all(self.db)
                .await?,
        )
    }

    /// Replaces name, type and file reference of a course
    ///
    /// # Returns
    /// - `Ok(Course)` - The updated course
    /// - `Err(DbErr::RecordNotFound)` - No course with that ID
    pub async fn update(&self, id: i32, params: CourseParams) -> Result<Course, DbErr> {
        let course = entity::prelude::Course::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Course with id {} not found",
                id
            )))?;

        let mut active_model: entity::course::ActiveModel = course.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.course_type = ActiveValue::Set(params.course_type.as_str().to_string());
        active_model.file_path = ActiveValue::Set(params.file_path);

        Course::from_entity(active_model.update(self.db).await?)
    }

    /// Deletes a course and, by cascade, its links to trainings
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Course::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    fn collect(entities: Vec<entity::course::Model>) -> Result<Vec<Course>, DbErr> {
        entities.into_iter().map(Course::from_entity).collect()
    }
}
