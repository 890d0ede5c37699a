use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        student::{RegisterStudentDto, StudentDto, StudentStatus, UpdateStudentDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::student::{RegisterStudentParams, UpdateStudentParams},
        service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

#[derive(Deserialize, IntoParams)]
pub struct StudentFilter {
    /// Only list students with this registration status
    pub status: Option<StudentStatus>,
}

/// List students, optionally filtered by registration status.
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    params(StudentFilter),
    responses(
        (status = 200, description = "Students ordered by ID", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    Query(filter): Query<StudentFilter>,
) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).get_all(filter.status).await?;

    let dtos: Vec<StudentDto> = students.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Register a student.
///
/// The student starts pending until an administrator approves or rejects the
/// registration. Names are trimmed and the email is stored lowercase.
///
/// # Returns
/// - `201 Created` - The registered student
/// - `422 Unprocessable Entity` - Invalid fields, email already used or unknown training
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = RegisterStudentDto,
    responses(
        (status = 201, description = "Successfully registered student", body = StudentDto),
        (status = 422, description = "Invalid student data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_student(
    State(state): State<AppState>,
    Json(payload): Json<RegisterStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(ValidationError::from)?;

    let student = StudentService::new(&state.db)
        .register(RegisterStudentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/students/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "The student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).get_by_id(student_id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Update a student's contact details and requested training.
///
/// The registration status is left as is; use approve or reject to change it.
///
/// # Returns
/// - `200 OK` - The updated student
/// - `404 Not Found` - No student with that ID
/// - `422 Unprocessable Entity` - Invalid fields, email taken or unknown training
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/students/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 422, description = "Invalid student data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(ValidationError::from)?;

    let student = StudentService::new(&state.db)
        .update(UpdateStudentParams::from_dto(student_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Delete a student with their results and queued notifications.
#[utoipa::path(
    delete,
    path = "/api/students/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted student"),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    StudentService::new(&state.db).delete(student_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Accept a student's registration.
#[utoipa::path(
    post,
    path = "/api/students/{student_id}/approve",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student validated", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).approve(student_id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Refuse a student's registration.
#[utoipa::path(
    post,
    path = "/api/students/{student_id}/reject",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student rejected", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).reject(student_id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}
