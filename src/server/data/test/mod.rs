mod admin_notification;
mod course;
mod exam;
mod exam_result;
mod notification;
