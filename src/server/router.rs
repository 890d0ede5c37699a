//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its utoipa path definition. The
//! collected OpenAPI document is served at `/api/docs/openapi.json` and browsable
//! through Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// # Returns
/// An Axum `Router<AppState>` ready to receive the application state.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Autoécole", description = "Driving school administration API"), tags(
        (name = controller::category::CATEGORY_TAG, description = "Licence categories"),
        (name = controller::training::TRAINING_TAG, description = "Trainings, completion and results report"),
        (name = controller::exam::EXAM_TAG, description = "Exams of a training"),
        (name = controller::result::RESULT_TAG, description = "Exam scores"),
        (name = controller::student::STUDENT_TAG, description = "Student registrations"),
        (name = controller::course::COURSE_TAG, description = "Course catalogue and training courses"),
        (name = controller::notification::NOTIFICATION_TAG, description = "Administrators' activity feed"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::category::get_categories))
        .routes(routes!(
            controller::training::get_trainings,
            controller::training::create_training
        ))
        .routes(routes!(controller::training::get_active_trainings))
        .routes(routes!(controller::training::get_global_finished_results))
        .routes(routes!(
            controller::training::get_training,
            controller::training::update_training,
            controller::training::delete_training
        ))
        .routes(routes!(controller::training::get_training_students))
        .routes(routes!(controller::training::get_training_exams))
        .routes(routes!(controller::training::finish_training))
        .routes(routes!(
            controller::course::get_training_courses,
            controller::course::attach_course
        ))
        .routes(routes!(controller::course::detach_course))
        .routes(routes!(
            controller::course::get_courses,
            controller::course::create_course
        ))
        .routes(routes!(controller::course::get_specific_courses))
        .routes(routes!(
            controller::course::get_course,
            controller::course::update_course,
            controller::course::delete_course
        ))
        .routes(routes!(
            controller::exam::get_exams,
            controller::exam::create_exam
        ))
        .routes(routes!(
            controller::exam::get_exam,
            controller::exam::update_exam,
            controller::exam::delete_exam
        ))
        .routes(routes!(
            controller::result::get_exam_results,
            controller::result::save_exam_result
        ))
        .routes(routes!(
            controller::result::get_result,
            controller::result::delete_result
        ))
        .routes(routes!(
            controller::student::get_students,
            controller::student::register_student
        ))
        .routes(routes!(
            controller::student::get_student,
            controller::student::update_student,
            controller::student::delete_student
        ))
        .routes(routes!(controller::student::approve_student))
        .routes(routes!(controller::student::reject_student))
        .routes(routes!(
            controller::notification::get_notifications,
            controller::notification::delete_all_notifications
        ))
        .routes(routes!(controller::notification::delete_notification))
        .routes(routes!(controller::notification::mark_notification_read))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
