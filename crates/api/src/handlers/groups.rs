//! Handlers for formed groups and the peer reviews written inside them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use teamform_core::error::CoreError;
use teamform_core::review::{validate_rating, validate_review_pair};
use teamform_core::types::DbId;
use teamform_db::models::group::{Group, GroupWithMembers};
use teamform_db::models::review::{CreateReview, Review};
use teamform_db::repositories::{GroupRepo, ReviewRepo};
use teamform_db::DbPool;
use validator::Validate;

use super::themes::find_theme;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

async fn find_group(pool: &DbPool, id: DbId) -> AppResult<Group> {
    GroupRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Group", id }))
}

/// GET /api/v1/themes/{id}/groups
pub async fn list_groups(
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Group>>>> {
    find_theme(&state.pool, theme_id).await?;
    let groups = GroupRepo::list_for_theme(&state.pool, theme_id).await?;
    Ok(Json(DataResponse { data: groups }))
}

/// GET /api/v1/groups/{id}
pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<GroupWithMembers>>> {
    let group = find_group(&state.pool, id).await?;
    let members = GroupRepo::list_members(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: GroupWithMembers { group, members },
    }))
}

/// GET /api/v1/groups/{id}/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(group_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Review>>>> {
    find_group(&state.pool, group_id).await?;
    let reviews = ReviewRepo::list_for_group(&state.pool, group_id).await?;
    Ok(Json(DataResponse { data: reviews }))
}

/// POST /api/v1/groups/{id}/reviews
///
/// One review per reviewer/reviewee pair within a group; a repeat is a 409.
pub async fn create_review(
    State(state): State<AppState>,
    Path(group_id): Path<DbId>,
    Json(input): Json<CreateReview>,
) -> AppResult<(StatusCode, Json<DataResponse<Review>>)> {
    input.validate()?;
    validate_rating(input.rating)?;
    validate_review_pair(input.reviewer_id, input.reviewee_id)?;

    find_group(&state.pool, group_id).await?;
    let review = ReviewRepo::create(&state.pool, group_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}
