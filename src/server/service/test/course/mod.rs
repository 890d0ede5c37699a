use crate::{
    model::course::CourseType,
    server::{error::AppError, model::course::CourseParams, service::course::CourseService},
};
use test_utils::{builder::TestBuilder, factory};

mod catalogue;

fn course_params(name: &str, course_type: CourseType) -> CourseParams {
    CourseParams {
        name: name.to_string(),
        course_type,
        file_path: None,
    }
}
