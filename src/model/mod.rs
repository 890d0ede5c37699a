//! API data transfer objects.
//!
//! Request and response bodies exchanged with the admin dashboard. Request bodies
//! carry `validator` rules that are checked before any service is invoked.

pub mod api;
pub mod category;
pub mod course;
pub mod exam;
pub mod notification;
pub mod result;
pub mod student;
pub mod training;
