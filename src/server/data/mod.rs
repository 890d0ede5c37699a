//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from the business logic layer. They are
//! generic over `ConnectionTrait` so they can run on the connection pool or inside a
//! transaction.

pub mod admin_notification;
pub mod category;
pub mod course;
pub mod exam;
pub mod exam_result;
pub mod notification;
pub mod student;
pub mod training;
pub mod training_course;

#[cfg(test)]
mod test;
