use axum::routing::delete;
use axum::Router;

use crate::handlers::questions;
use crate::state::AppState;

/// Routes mounted at `/questions`.
///
/// ```text
/// DELETE /{id}    -> delete_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(questions::delete_question))
}
