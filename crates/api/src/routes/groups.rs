//! Route definitions for the `/groups` resource.
//!
//! Groups are read-only over HTTP; they are created by the assignment engine.

use axum::routing::get;
use axum::Router;

use crate::handlers::groups;
use crate::state::AppState;

/// Routes mounted at `/groups`.
///
/// ```text
/// GET    /{id}              -> get_group
/// GET    /{id}/reviews      -> list_reviews
/// POST   /{id}/reviews      -> create_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(groups::get_group))
        .route(
            "/{id}/reviews",
            get(groups::list_reviews).post(groups::create_review),
        )
}
