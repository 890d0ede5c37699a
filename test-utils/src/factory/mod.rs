//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories only insert
//! the row they are named after; dependencies must exist first (see `helpers`).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let category = factory::create_category(&db).await?;
//! let training = factory::create_training(&db, category.id).await?;
//! let exam = factory::exam::ExamFactory::new(&db, training.id)
//!     .date(NaiveDate::from_ymd_opt(2024, 3, 1))
//!     .build()
//!     .await?;
//! let student = factory::create_validated_student(&db, training.id).await?;
//! let result = factory::create_result(&db, exam.id, student.id, 14.0).await?;
//! ```
//!
//! # Available Factories
//!
//! - `admin_notification` - Entries of the administrators' activity feed
//! - `category` - Licence categories
//! - `course` - Courses and their links to trainings
//! - `training` - Trainings
//! - `exam` - Exams belonging to a training
//! - `student` - Students, optionally enrolled in a training
//! - `exam_result` - Scores for an (exam, student) pair
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod admin_notification;
pub mod category;
pub mod course;
pub mod exam;
pub mod exam_result;
pub mod helpers;
pub mod student;
pub mod training;

pub use admin_notification::create_admin_notification;
pub use category::create_category;
pub use course::{attach_course, create_course};
pub use exam::create_exam;
pub use exam_result::create_result;
pub use student::{create_student, create_validated_student};
pub use training::create_training;
