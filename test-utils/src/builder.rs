use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Category, Training};
///
/// let test = TestBuilder::new()
///     .with_table(Category)
///     .with_table(Training)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign keys
    /// after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index to the test database schema.
    ///
    /// Entity derived tables only carry single column constraints, so composite unique
    /// keys that the migrations define must be added here for `ON CONFLICT` upserts.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds every table needed to manage trainings and their results.
    ///
    /// Adds, in dependency order:
    /// - Category
    /// - Training
    /// - Exam
    /// - Student
    /// - ExamResult, with its unique (exam_id, student_id) index
    /// - Course
    /// - TrainingCourse, with its unique (training_id, course_id) index
    /// - AdminNotification
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_training_tables(self) -> Self {
        self.with_table(Category)
            .with_table(Training)
            .with_table(Exam)
            .with_table(Student)
            .with_table(ExamResult)
            .with_index(
                Index::create()
                    .name("idx_exam_result_exam_id_student_id")
                    .table(ExamResult)
                    .col(entity::exam_result::Column::ExamId)
                    .col(entity::exam_result::Column::StudentId)
                    .unique()
                    .to_owned(),
            )
            .with_table(Course)
            .with_table(TrainingCourse)
            .with_index(
                Index::create()
                    .name("idx_training_course_training_id_course_id")
                    .table(TrainingCourse)
                    .col(entity::training_course::Column::TrainingId)
                    .col(entity::training_course::Column::CourseId)
                    .unique()
                    .to_owned(),
            )
            .with_table(AdminNotification)
    }

    /// Adds the training tables plus the notification outbox.
    ///
    /// Equivalent to `with_training_tables()` followed by `with_table(TrainingNotification)`.
    /// Use this when testing training completion or notification dispatch.
    pub fn with_notification_tables(self) -> Self {
        self.with_training_tables()
            .with_table(TrainingNotification)
            .with_index(
                Index::create()
                    .name("idx_training_notification_training_id_student_id")
                    .table(TrainingNotification)
                    .col(entity::training_notification::Column::TrainingId)
                    .col(entity::training_notification::Column::StudentId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
