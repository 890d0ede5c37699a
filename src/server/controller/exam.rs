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
        exam::{CreateExamDto, ExamDto, UpdateExamDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::exam::{CreateExamParams, UpdateExamParams},
        service::exam::ExamService,
        state::AppState,
    },
};

/// Tag for grouping exam endpoints in OpenAPI documentation
pub static EXAM_TAG: &str = "exam";

/// List every exam.
#[utoipa::path(
    get,
    path = "/api/exams",
    tag = EXAM_TAG,
    responses(
        (status = 200, description = "All exams", body = Vec<ExamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_exams(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let exams = ExamService::new(&state.db).get_all().await?;

    let dtos: Vec<ExamDto> = exams.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Add an exam to a training.
///
/// # Returns
/// - `201 Created` - The created exam
/// - `404 Not Found` - No training with that ID
/// - `409 Conflict` - The training is finished
/// - `422 Unprocessable Entity` - Invalid fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/exams",
    tag = EXAM_TAG,
    request_body = CreateExamDto,
    responses(
        (status = 201, description = "Successfully created exam", body = ExamDto),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 409, description = "Training is finished", body = ErrorDto),
        (status = 422, description = "Invalid exam data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_exam(
    State(state): State<AppState>,
    Json(payload): Json<CreateExamDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(ValidationError::from)?;

    let exam = ExamService::new(&state.db)
        .create(CreateExamParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(exam.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/exams/{exam_id}",
    tag = EXAM_TAG,
    params(
        ("exam_id" = i32, Path, description = "Exam ID")
    ),
    responses(
        (status = 200, description = "The exam", body = ExamDto),
        (status = 404, description = "Exam not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_exam(
    State(state): State<AppState>,
    Path(exam_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let exam = ExamService::new(&state.db).get_by_id(exam_id).await?;

    Ok((StatusCode::OK, Json(exam.into_dto())))
}

/// Update an exam of a training that is not finished.
#[utoipa::path(
    put,
    path = "/api/exams/{exam_id}",
    tag = EXAM_TAG,
    params(
        ("exam_id" = i32, Path, description = "Exam ID")
    ),
    request_body = UpdateExamDto,
    responses(
        (status = 200, description = "Successfully updated exam", body = ExamDto),
        (status = 404, description = "Exam not found", body = ErrorDto),
        (status = 409, description = "Training is finished", body = ErrorDto),
        (status = 422, description = "Invalid exam data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_exam(
    State(state): State<AppState>,
    Path(exam_id): Path<i32>,
    Json(payload): Json<UpdateExamDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(ValidationError::from)?;

    let exam = ExamService::new(&state.db)
        .update(UpdateExamParams::from_dto(exam_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(exam.into_dto())))
}

/// Delete an exam and its results, while its training is not finished.
#[utoipa::path(
    delete,
    path = "/api/exams/{exam_id}",
    tag = EXAM_TAG,
    params(
        ("exam_id" = i32, Path, description = "Exam ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted exam"),
        (status = 404, description = "Exam not found", body = ErrorDto),
        (status = 409, description = "Training is finished", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_exam(
    State(state): State<AppState>,
    Path(exam_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ExamService::new(&state.db).delete(exam_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
