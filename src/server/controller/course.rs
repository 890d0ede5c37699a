use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        course::{AttachCourseDto, CourseDto, CourseFormDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::course::CourseParams,
        service::course::CourseService,
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// List every course.
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "All courses ordered by ID", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db).get_all().await?;

    let dtos: Vec<CourseDto> = courses.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List the specific courses, the ones added to trainings one by one.
#[utoipa::path(
    get,
    path = "/api/courses/specific",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Specific courses ordered by ID", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_specific_courses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db).get_specific().await?;

    let dtos: Vec<CourseDto> = courses.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a course.
///
/// The course material is referenced by `file_path`, which is stored as given.
///
/// # Returns
/// - `201 Created` - The created course
/// - `422 Unprocessable Entity` - Invalid fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = COURSE_TAG,
    request_body = CourseFormDto,
    responses(
        (status = 201, description = "Successfully created course", body = CourseDto),
        (status = 422, description = "Invalid course data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    Json(payload): Json<CourseFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(ValidationError::from)?;

    let course = CourseService::new(&state.db)
        .create(CourseParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "The course", body = CourseDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db).get_by_id(course_id).await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    request_body = CourseFormDto,
    responses(
        (status = 200, description = "Successfully updated course", body = CourseDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 422, description = "Invalid course data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    Json(payload): Json<CourseFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(ValidationError::from)?;

    let course = CourseService::new(&state.db)
        .update(course_id, CourseParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Delete a course and remove it from every training.
#[utoipa::path(
    delete,
    path = "/api/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted course"),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    CourseService::new(&state.db).delete(course_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the courses taught in a training.
#[utoipa::path(
    get,
    path = "/api/trainings/{training_id}/courses",
    tag = COURSE_TAG,
    params(
        ("training_id" = i32, Path, description = "Training ID")
    ),
    responses(
        (status = 200, description = "Courses of the training", body = Vec<CourseDto>),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_training_courses(
    State(state): State<AppState>,
    Path(training_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db)
        .get_by_training_id(training_id)
        .await?;

    let dtos: Vec<CourseDto> = courses.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Add a course to a training.
///
/// # Returns
/// - `201 Created` - The linked course
/// - `400 Bad Request` - The course is already part of the training
/// - `404 Not Found` - No training with that ID
/// - `422 Unprocessable Entity` - Unknown course
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/trainings/{training_id}/courses",
    tag = COURSE_TAG,
    params(
        ("training_id" = i32, Path, description = "Training ID")
    ),
    request_body = AttachCourseDto,
    responses(
        (status = 201, description = "Course added to the training", body = CourseDto),
        (status = 400, description = "Course already in the training", body = ErrorDto),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 422, description = "Unknown course", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn attach_course(
    State(state): State<AppState>,
    Path(training_id): Path<i32>,
    Json(payload): Json<AttachCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db)
        .attach_to_training(training_id, payload.course_id)
        .await?;

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

/// Remove a course from a training.
#[utoipa::path(
    delete,
    path = "/api/trainings/{training_id}/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("training_id" = i32, Path, description = "Training ID"),
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Course removed from the training"),
        (status = 404, description = "Course not part of the training", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn detach_course(
    State(state): State<AppState>,
    Path((training_id, course_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    CourseService::new(&state.db)
        .detach_from_training(training_id, course_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
