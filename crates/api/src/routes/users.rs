//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{notifications, users};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                      -> list_users
/// POST   /                      -> create_user
/// GET    /{id}                  -> get_user
/// GET    /{id}/notifications    -> list_notifications
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route("/{id}", get(users::get_user))
        .route("/{id}/notifications", get(notifications::list_notifications))
}
