//! Course factory for creating test courses and linking them to trainings.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test courses.
///
/// # Example
///
/// ```rust,ignore
/// let course = CourseFactory::new(&db)
///     .name("Conduite de nuit")
///     .course_type("specific")
///     .build()
///     .await?;
/// ```
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    course_type: String,
    file_path: Option<String>,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Course {id}"`
    /// - course_type: `"common"`
    /// - file_path: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Course {}", id),
            course_type: "common".to_string(),
            file_path: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn course_type(mut self, course_type: impl Into<String>) -> Self {
        self.course_type = course_type.into();
        self
    }

    pub fn file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    /// Builds and inserts the course entity into the database.
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            course_type: ActiveValue::Set(self.course_type),
            file_path: ActiveValue::Set(self.file_path),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a common course with default values.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}

/// Links an existing course to an existing training.
pub async fn attach_course(
    db: &DatabaseConnection,
    training_id: i32,
    course_id: i32,
) -> Result<entity::training_course::Model, DbErr> {
    entity::training_course::ActiveModel {
        id: ActiveValue::NotSet,
        training_id: ActiveValue::Set(training_id),
        course_id: ActiveValue::Set(course_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
