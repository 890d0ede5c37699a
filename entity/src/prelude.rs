pub use super::admin_notification::Entity as AdminNotification;
pub use super::category::Entity as Category;
pub use super::course::Entity as Course;
pub use super::exam::Entity as Exam;
pub use super::exam_result::Entity as ExamResult;
pub use super::student::Entity as Student;
pub use super::training::Entity as Training;
pub use super::training_course::Entity as TrainingCourse;
pub use super::training_notification::Entity as TrainingNotification;
