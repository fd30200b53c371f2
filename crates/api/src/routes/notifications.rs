//! Route definitions for the `/notifications` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// POST   /              -> create_notification
/// POST   /{id}/read     -> mark_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(notifications::create_notification))
        .route("/{id}/read", post(notifications::mark_read))
}
