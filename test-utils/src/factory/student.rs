//! Student factory for creating test students.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test students.
///
/// # Example
///
/// ```rust,ignore
/// let student = StudentFactory::new(&db)
///     .training_id(training.id)
///     .status("validated")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    status: String,
    training_id: Option<i32>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Student"`
    /// - last_name: `"{id}"`
    /// - email: `"student{id}@example.com"`
    /// - status: `"pending"`
    /// - training_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Student".to_string(),
            last_name: id.to_string(),
            email: format!("student{}@example.com", id),
            status: "pending".to_string(),
            training_id: None,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn training_id(mut self, training_id: i32) -> Self {
        self.training_id = Some(training_id);
        self
    }

    /// Builds and inserts the student entity into the database.
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            training_id: ActiveValue::Set(self.training_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending student who is not enrolled anywhere.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}

/// Creates a validated student enrolled in the training.
pub async fn create_validated_student(
    db: &DatabaseConnection,
    training_id: i32,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db)
        .training_id(training_id)
        .status("validated")
        .build()
        .await
}
