pub mod category;
pub mod course;
pub mod exam;
pub mod notification;
pub mod result;
pub mod student;
pub mod training;
