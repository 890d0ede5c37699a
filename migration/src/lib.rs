pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_category_table;
mod m20250601_000002_create_training_table;
mod m20250601_000003_create_exam_table;
mod m20250601_000004_create_student_table;
mod m20250601_000005_create_exam_result_table;
mod m20250602_000006_create_training_notification_table;
mod m20250602_000007_seed_categories;
mod m20250603_000008_create_course_table;
mod m20250603_000009_create_training_course_table;
mod m20250603_000010_create_admin_notification_table;
mod m20250603_000011_seed_courses;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_category_table::Migration),
            Box::new(m20250601_000002_create_training_table::Migration),
            Box::new(m20250601_000003_create_exam_table::Migration),
            Box::new(m20250601_000004_create_student_table::Migration),
            Box::new(m20250601_000005_create_exam_result_table::Migration),
            Box::new(m20250602_000006_create_training_notification_table::Migration),
            Box::new(m20250602_000007_seed_categories::Migration),
            Box::new(m20250603_000008_create_course_table::Migration),
            Box::new(m20250603_000009_create_training_course_table::Migration),
            Box::new(m20250603_000010_create_admin_notification_table::Migration),
            Box::new(m20250603_000011_seed_courses::Migration),
        ]
    }
}
