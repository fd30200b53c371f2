//! Handlers for ideas and the votes cast on them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use teamform_core::error::CoreError;
use teamform_core::theme::{ensure_submission_open, ensure_voting_open};
use teamform_core::types::DbId;
use teamform_db::models::idea::{CreateIdea, Idea, IdeaWithVotes};
use teamform_db::models::vote::{CreateVote, Vote};
use teamform_db::repositories::{IdeaRepo, VoteRepo};
use teamform_db::DbPool;
use validator::Validate;

use super::themes::find_theme;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

async fn find_idea(pool: &DbPool, id: DbId) -> AppResult<Idea> {
    IdeaRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Idea", id }))
}

/// GET /api/v1/themes/{id}/ideas
///
/// Ideas in submission order, each with its current vote count.
pub async fn list_ideas(
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<IdeaWithVotes>>>> {
    find_theme(&state.pool, theme_id).await?;
    let ideas = IdeaRepo::list_for_theme(&state.pool, theme_id).await?;
    Ok(Json(DataResponse { data: ideas }))
}

/// POST /api/v1/themes/{id}/ideas
pub async fn create_idea(
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
    Json(input): Json<CreateIdea>,
) -> AppResult<(StatusCode, Json<DataResponse<Idea>>)> {
    input.validate()?;

    let theme = find_theme(&state.pool, theme_id).await?;
    ensure_submission_open(Utc::now(), theme.submission_deadline, theme.voting_deadline)?;

    let idea = IdeaRepo::create(&state.pool, theme_id, &input).await?;
    tracing::info!(theme_id, idea_id = idea.id, submitted_by = idea.submitted_by, "Idea submitted");
    Ok((StatusCode::CREATED, Json(DataResponse { data: idea })))
}

/// GET /api/v1/ideas/{id}
pub async fn get_idea(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Idea>>> {
    let idea = find_idea(&state.pool, id).await?;
    Ok(Json(DataResponse { data: idea }))
}

/// DELETE /api/v1/ideas/{id}
pub async fn delete_idea(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if IdeaRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Idea", id }))
    }
}

/// GET /api/v1/ideas/{id}/votes
pub async fn list_votes(
    State(state): State<AppState>,
    Path(idea_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Vote>>>> {
    find_idea(&state.pool, idea_id).await?;
    let votes = VoteRepo::list_for_idea(&state.pool, idea_id).await?;
    Ok(Json(DataResponse { data: votes }))
}

/// POST /api/v1/ideas/{id}/votes
///
/// One vote per user per idea; a repeat vote is a 409.
pub async fn cast_vote(
    State(state): State<AppState>,
    Path(idea_id): Path<DbId>,
    Json(input): Json<CreateVote>,
) -> AppResult<(StatusCode, Json<DataResponse<Vote>>)> {
    let idea = find_idea(&state.pool, idea_id).await?;
    let theme = find_theme(&state.pool, idea.theme_id).await?;
    ensure_voting_open(Utc::now(), theme.voting_deadline)?;

    let vote = VoteRepo::create(&state.pool, idea_id, input.voted_by).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: vote })))
}

/// DELETE /api/v1/ideas/{id}/votes/{user_id}
pub async fn retract_vote(
    State(state): State<AppState>,
    Path((idea_id, user_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let idea = find_idea(&state.pool, idea_id).await?;
    let theme = find_theme(&state.pool, idea.theme_id).await?;
    ensure_voting_open(Utc::now(), theme.voting_deadline)?;

    if VoteRepo::delete(&state.pool, idea_id, user_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::BadRequest(format!(
            "User {user_id} has not voted for idea {idea_id}"
        )))
    }
}
