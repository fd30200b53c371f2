//! Route definitions for the `/ideas` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::ideas;
use crate::state::AppState;

/// Routes mounted at `/ideas`.
///
/// ```text
/// GET    /{id}                    -> get_idea
/// DELETE /{id}                    -> delete_idea
/// GET    /{id}/votes              -> list_votes
/// POST   /{id}/votes              -> cast_vote
/// DELETE /{id}/votes/{user_id}    -> retract_vote
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(ideas::get_idea).delete(ideas::delete_idea))
        .route("/{id}/votes", get(ideas::list_votes).post(ideas::cast_vote))
        .route("/{id}/votes/{user_id}", delete(ideas::retract_vote))
}
