use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::{api::ErrorDto, notification::AdminNotificationDto},
    server::{
        error::AppError, service::admin_notification::AdminNotificationService, state::AppState,
    },
};

/// Tag for grouping activity feed endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// List the administrators' activity feed, newest first.
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Feed entries, newest first", body = Vec<AdminNotificationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let notifications = AdminNotificationService::new(&state.db).get_all().await?;

    let dtos: Vec<AdminNotificationDto> =
        notifications.into_iter().map(|n| n.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    put,
    path = "/api/notifications/{notification_id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("notification_id" = i32, Path, description = "Feed entry ID")
    ),
    responses(
        (status = 200, description = "Entry marked as read", body = AdminNotificationDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let notification = AdminNotificationService::new(&state.db)
        .mark_read(notification_id)
        .await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/notifications/{notification_id}",
    tag = NOTIFICATION_TAG,
    params(
        ("notification_id" = i32, Path, description = "Feed entry ID")
    ),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AdminNotificationService::new(&state.db)
        .delete(notification_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Empty the activity feed.
#[utoipa::path(
    delete,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 204, description = "Feed emptied"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_all_notifications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let removed = AdminNotificationService::new(&state.db).delete_all().await?;
    tracing::info!("Cleared {} entries from the activity feed", removed);

    Ok(StatusCode::NO_CONTENT)
}
