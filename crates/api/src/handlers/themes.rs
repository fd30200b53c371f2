//! Handlers for the `/themes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use teamform_core::analytics::{summarize, ThemeAnalytics};
use teamform_core::error::CoreError;
use teamform_core::theme::validate_deadlines;
use teamform_core::types::DbId;
use teamform_db::models::theme::{CreateTheme, Theme, UpdateTheme};
use teamform_db::repositories::{AnalyticsRepo, ThemeRepo};
use teamform_db::DbPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Load a theme or fail with 404.
pub(crate) async fn find_theme(pool: &DbPool, id: DbId) -> AppResult<Theme> {
    ThemeRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Theme", id }))
}

/// GET /api/v1/themes
pub async fn list_themes(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Theme>>>> {
    let themes = ThemeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: themes }))
}

/// POST /api/v1/themes
pub async fn create_theme(
    State(state): State<AppState>,
    Json(input): Json<CreateTheme>,
) -> AppResult<(StatusCode, Json<DataResponse<Theme>>)> {
    input.validate()?;
    validate_deadlines(
        input.submission_deadline,
        input.voting_deadline,
        input.review_deadline,
    )?;

    let theme = ThemeRepo::create(&state.pool, &input).await?;
    tracing::info!(theme_id = theme.id, title = %theme.title, "Theme created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: theme })))
}

/// GET /api/v1/themes/{id}
pub async fn get_theme(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Theme>>> {
    let theme = find_theme(&state.pool, id).await?;
    Ok(Json(DataResponse { data: theme }))
}

/// PUT /api/v1/themes/{id}
///
/// Partial update. Deadlines are checked against the merged result.
pub async fn update_theme(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTheme>,
) -> AppResult<Json<DataResponse<Theme>>> {
    input.validate()?;

    let existing = find_theme(&state.pool, id).await?;
    validate_deadlines(
        input.submission_deadline.or(existing.submission_deadline),
        input.voting_deadline.unwrap_or(existing.voting_deadline),
        input.review_deadline.or(existing.review_deadline),
    )?;

    let theme = ThemeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Theme", id }))?;
    Ok(Json(DataResponse { data: theme }))
}

/// DELETE /api/v1/themes/{id}
pub async fn delete_theme(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ThemeRepo::delete(&state.pool, id).await? {
        tracing::info!(theme_id = id, "Theme deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Theme", id }))
    }
}

/// GET /api/v1/themes/{id}/analytics
pub async fn get_analytics(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ThemeAnalytics>>> {
    find_theme(&state.pool, id).await?;
    let activity = AnalyticsRepo::load_activity(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: summarize(&activity),
    }))
}
