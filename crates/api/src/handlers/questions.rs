//! Handlers for a theme's peer review questionnaire.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use teamform_core::error::CoreError;
use teamform_core::types::DbId;
use teamform_db::models::question::{CreateQuestion, Question};
use teamform_db::repositories::QuestionRepo;
use validator::Validate;

use super::themes::find_theme;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/themes/{id}/questions
pub async fn list_questions(
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Question>>>> {
    find_theme(&state.pool, theme_id).await?;
    let questions = QuestionRepo::list_for_theme(&state.pool, theme_id).await?;
    Ok(Json(DataResponse { data: questions }))
}

/// POST /api/v1/themes/{id}/questions
pub async fn create_question(
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
    Json(input): Json<CreateQuestion>,
) -> AppResult<(StatusCode, Json<DataResponse<Question>>)> {
    input.validate()?;
    find_theme(&state.pool, theme_id).await?;

    let question = QuestionRepo::create(&state.pool, theme_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: question })))
}

/// DELETE /api/v1/questions/{id}
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if QuestionRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }))
    }
}
