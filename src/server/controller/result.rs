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
        result::{ExamResultDto, SaveResultDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::result::SaveResultParams,
        service::result::ResultService,
        state::AppState,
    },
};

/// Tag for grouping result endpoints in OpenAPI documentation
pub static RESULT_TAG: &str = "result";

/// List the results of an exam with their students.
///
/// # Returns
/// - `200 OK` - Results ordered by student ID
/// - `404 Not Found` - No exam with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/exams/{exam_id}/results",
    tag = RESULT_TAG,
    params(
        ("exam_id" = i32, Path, description = "Exam ID")
    ),
    responses(
        (status = 200, description = "Results of the exam", body = Vec<ExamResultDto>),
        (status = 404, description = "Exam not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_exam_results(
    State(state): State<AppState>,
    Path(exam_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let results = ResultService::new(&state.db).get_by_exam_id(exam_id).await?;

    let dtos: Vec<ExamResultDto> = results.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Record the score of a student for an exam.
///
/// Saving a score for a student who already has one for this exam replaces it. The
/// exam is passed with a score of 10 or more.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `exam_id` - Exam the score belongs to
/// - `payload` - Student ID and score out of 20
///
/// # Returns
/// - `200 OK` - The stored result
/// - `404 Not Found` - No exam with that ID
/// - `422 Unprocessable Entity` - Score outside 0 to 20 or unknown student
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/exams/{exam_id}/results",
    tag = RESULT_TAG,
    params(
        ("exam_id" = i32, Path, description = "Exam ID")
    ),
    request_body = SaveResultDto,
    responses(
        (status = 200, description = "Stored result", body = ExamResultDto),
        (status = 404, description = "Exam not found", body = ErrorDto),
        (status = 422, description = "Invalid result data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_exam_result(
    State(state): State<AppState>,
    Path(exam_id): Path<i32>,
    Json(payload): Json<SaveResultDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(ValidationError::from)?;

    let result = ResultService::new(&state.db)
        .save(SaveResultParams {
            exam_id,
            student_id: payload.student_id,
            score: payload.score,
        })
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/results/{result_id}",
    tag = RESULT_TAG,
    params(
        ("result_id" = i32, Path, description = "Result ID")
    ),
    responses(
        (status = 200, description = "The result", body = ExamResultDto),
        (status = 404, description = "Result not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_result(
    State(state): State<AppState>,
    Path(result_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let result = ResultService::new(&state.db).get_by_id(result_id).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/results/{result_id}",
    tag = RESULT_TAG,
    params(
        ("result_id" = i32, Path, description = "Result ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted result"),
        (status = 404, description = "Result not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_result(
    State(state): State<AppState>,
    Path(result_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ResultService::new(&state.db).delete(result_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
