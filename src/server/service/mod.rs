//! Business logic layer.
//!
//! Services orchestrate repositories and enforce the rules that span several tables:
//! finishing a training, computing verdicts, queueing and delivering notifications.

pub mod admin_notification;
pub mod category;
pub mod completion;
pub mod course;
pub mod exam;
pub mod global_results;
pub mod notification;
pub mod result;
pub mod student;
pub mod training;
pub mod verdict;
