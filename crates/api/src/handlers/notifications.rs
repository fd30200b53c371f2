//! Handlers for in-app notifications.
//!
//! Notifications are stored and listed only; nothing is delivered out of band.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use teamform_core::error::CoreError;
use teamform_core::types::DbId;
use teamform_db::models::notification::{CreateNotification, Notification};
use teamform_db::repositories::NotificationRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::NotificationQuery;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users/{id}/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Query(params): Query<NotificationQuery>,
) -> AppResult<Json<DataResponse<Vec<Notification>>>> {
    let (limit, offset) = params.page();
    let notifications =
        NotificationRepo::list_for_user(&state.pool, user_id, params.unread_only, limit, offset)
            .await?;
    Ok(Json(DataResponse {
        data: notifications,
    }))
}

/// POST /api/v1/notifications
pub async fn create_notification(
    State(state): State<AppState>,
    Json(input): Json<CreateNotification>,
) -> AppResult<(StatusCode, Json<DataResponse<Notification>>)> {
    input.validate()?;
    let notification = NotificationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: notification })))
}

/// POST /api/v1/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Notification>>> {
    let notification = NotificationRepo::mark_read(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }))?;
    Ok(Json(DataResponse { data: notification }))
}
