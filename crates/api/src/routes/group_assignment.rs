//! Route definitions for the group assignment triggers.

use axum::routing::post;
use axum::Router;

use crate::handlers::group_assignment;
use crate::state::AppState;

/// Routes mounted at `/group-assignment`.
///
/// ```text
/// POST   /          -> assign_groups
/// POST   /batch     -> run_batch
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(group_assignment::assign_groups))
        .route("/batch", post(group_assignment::run_batch))
}
