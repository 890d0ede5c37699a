//! SeaORM entities for the driving school schema.

pub mod prelude;

pub mod admin_notification;
pub mod category;
pub mod course;
pub mod exam;
pub mod exam_result;
pub mod student;
pub mod training;
pub mod training_course;
pub mod training_notification;
