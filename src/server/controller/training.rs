use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use dioxus_logger::tracing;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        exam::ExamDto,
        result::GlobalResultsDto,
        student::StudentDto,
        training::{FinishTrainingDto, TrainingDto, TrainingFormDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::{
            completion::CompletionOutcome,
            training::{CreateTrainingParams, UpdateTrainingParams},
        },
        service::{
            completion::CompletionService, exam::ExamService,
            global_results::GlobalResultsService, notification::NotificationDispatcher,
            training::TrainingService,
        },
        state::AppState,
    },
};

/// Tag for grouping training endpoints in OpenAPI documentation
pub static TRAINING_TAG: &str = "training";

const MISSING_RESULTS: &str =
    "La formation ne peut pas être terminée : certains examens n'ont pas de résultats.";

/// List all trainings with their category.
///
/// # Returns
/// - `200 OK` - All trainings ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/trainings",
    tag = TRAINING_TAG,
    responses(
        (status = 200, description = "All trainings", body = Vec<TrainingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trainings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let trainings = TrainingService::new(&state.db).get_all().await?;

    let dtos: Vec<TrainingDto> = trainings.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List trainings still open for registration.
///
/// A training is active while it is not finished and both its start date and its
/// registration end date are today or later.
///
/// # Returns
/// - `200 OK` - Active trainings ordered by start date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/trainings/active",
    tag = TRAINING_TAG,
    responses(
        (status = 200, description = "Active trainings", body = Vec<TrainingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_trainings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();
    let trainings = TrainingService::new(&state.db).get_active(today).await?;

    let dtos: Vec<TrainingDto> = trainings.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a training.
///
/// The training starts unfinished and receives two undated exams, "Code" (Théorique)
/// and "Conduite" (Pratique).
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Training fields
///
/// # Returns
/// - `201 Created` - The created training
/// - `422 Unprocessable Entity` - Invalid fields, unknown category or a date in the past
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/trainings",
    tag = TRAINING_TAG,
    request_body = TrainingFormDto,
    responses(
        (status = 201, description = "Successfully created training", body = TrainingDto),
        (status = 422, description = "Invalid training data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_training(
    State(state): State<AppState>,
    Json(payload): Json<TrainingFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(ValidationError::from)?;

    let today = Utc::now().date_naive();
    let training = TrainingService::new(&state.db)
        .create(CreateTrainingParams::from_dto(payload), today)
        .await?;

    Ok((StatusCode::CREATED, Json(training.into_dto())))
}

/// Get a training by ID.
///
/// # Returns
/// - `200 OK` - The training with its category
/// - `404 Not Found` - No training with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/trainings/{training_id}",
    tag = TRAINING_TAG,
    params(
        ("training_id" = i32, Path, description = "Training ID")
    ),
    responses(
        (status = 200, description = "The training", body = TrainingDto),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_training(
    State(state): State<AppState>,
    Path(training_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let training = TrainingService::new(&state.db).get_by_id(training_id).await?;

    Ok((StatusCode::OK, Json(training.into_dto())))
}

/// Update a training.
///
/// Every editable field is replaced. Dates are only checked against today when they
/// change. Finished trainings cannot be edited.
///
/// # Returns
/// - `200 OK` - The updated training
/// - `404 Not Found` - No training with that ID
/// - `409 Conflict` - The training is finished
/// - `422 Unprocessable Entity` - Invalid fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/trainings/{training_id}",
    tag = TRAINING_TAG,
    params(
        ("training_id" = i32, Path, description = "Training ID")
    ),
    request_body = TrainingFormDto,
    responses(
        (status = 200, description = "Successfully updated training", body = TrainingDto),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 409, description = "Training is finished", body = ErrorDto),
        (status = 422, description = "Invalid training data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_training(
    State(state): State<AppState>,
    Path(training_id): Path<i32>,
    Json(payload): Json<TrainingFormDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(ValidationError::from)?;

    let today = Utc::now().date_naive();
    let training = TrainingService::new(&state.db)
        .update(UpdateTrainingParams::from_dto(training_id, payload), today)
        .await?;

    Ok((StatusCode::OK, Json(training.into_dto())))
}

/// Delete a training with its exams, results and notifications.
///
/// # Returns
/// - `204 No Content` - Successfully deleted training
/// - `404 Not Found` - No training with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/trainings/{training_id}",
    tag = TRAINING_TAG,
    params(
        ("training_id" = i32, Path, description = "Training ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted training"),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_training(
    State(state): State<AppState>,
    Path(training_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    TrainingService::new(&state.db).delete(training_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the validated students of a training.
#[utoipa::path(
    get,
    path = "/api/trainings/{training_id}/students",
    tag = TRAINING_TAG,
    params(
        ("training_id" = i32, Path, description = "Training ID")
    ),
    responses(
        (status = 200, description = "Validated students of the training", body = Vec<StudentDto>),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_training_students(
    State(state): State<AppState>,
    Path(training_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let students = TrainingService::new(&state.db)
        .get_students(training_id)
        .await?;

    let dtos: Vec<StudentDto> = students.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List the exams of a training.
#[utoipa::path(
    get,
    path = "/api/trainings/{training_id}/exams",
    tag = TRAINING_TAG,
    params(
        ("training_id" = i32, Path, description = "Training ID")
    ),
    responses(
        (status = 200, description = "Exams of the training", body = Vec<ExamDto>),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_training_exams(
    State(state): State<AppState>,
    Path(training_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let exams = ExamService::new(&state.db)
        .get_by_training_id(training_id)
        .await?;

    let dtos: Vec<ExamDto> = exams.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Mark a training as finished and notify its students of their results.
///
/// The training is only finished when every one of its exams has at least one result.
/// The transition and the queueing of one notification per validated student are
/// committed together; the mails are then sent on a background task so a slow or
/// failing mail provider never delays or fails this request. Finishing a training
/// twice is harmless and sends nothing the second time.
///
/// # Arguments
/// - `state` - Application state containing the database connection and mailer
/// - `training_id` - Training to finish
///
/// # Returns
/// - `200 OK` - Training finished, or already finished
/// - `400 Bad Request` - Some exams have no result yet
/// - `404 Not Found` - No training with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/trainings/{training_id}/finish",
    tag = TRAINING_TAG,
    params(
        ("training_id" = i32, Path, description = "Training ID")
    ),
    responses(
        (status = 200, description = "Training finished", body = FinishTrainingDto),
        (status = 400, description = "Some exams have no result", body = ErrorDto),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn finish_training(
    State(state): State<AppState>,
    Path(training_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = CompletionService::new(&state.db)
        .evaluate_and_finish(training_id)
        .await?;

    let dto = match outcome {
        CompletionOutcome::Finished { summaries } => {
            let db = state.db.clone();
            let mailer = state.mailer.clone();
            tokio::spawn(async move {
                if let Err(e) = NotificationDispatcher::new(&db, mailer.as_ref())
                    .dispatch_pending(training_id)
                    .await
                {
                    tracing::error!(
                        "Error dispatching results of training {}: {}",
                        training_id,
                        e
                    );
                }
            });

            FinishTrainingDto {
                message: format!(
                    "La formation #{} est marquée comme terminée et les étudiants ont été notifiés.",
                    training_id
                ),
                notified: summaries.len(),
            }
        }
        CompletionOutcome::AlreadyFinished => FinishTrainingDto {
            message: format!("La formation #{} est déjà terminée.", training_id),
            notified: 0,
        },
        CompletionOutcome::MissingResults { .. } => {
            return Err(AppError::BadRequest(MISSING_RESULTS.to_string()));
        }
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Results of every student of every finished training.
///
/// Rows are ordered by training then student. Each row carries the student's scores for
/// the training's exams and the final verdict, which requires passing the two most
/// recent exams.
#[utoipa::path(
    get,
    path = "/api/trainings/global-finished-results",
    tag = TRAINING_TAG,
    responses(
        (status = 200, description = "Results of finished trainings", body = GlobalResultsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_global_finished_results(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = GlobalResultsService::new(&state.db).compute().await?;

    Ok((
        StatusCode::OK,
        Json(GlobalResultsDto {
            message: "Résultats globaux des étudiants pour toutes les formations terminées."
                .to_string(),
            results: rows.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}
