pub mod group_assignment;
pub mod groups;
pub mod health;
pub mod ideas;
pub mod notifications;
pub mod questions;
pub mod themes;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /themes                                          list, create
/// /themes/{id}                                     get, update, delete
/// /themes/{id}/ideas                               list (with votes), submit
/// /themes/{id}/groups                              list formed groups
/// /themes/{id}/questions                           list, create
/// /themes/{id}/analytics                           dashboard figures
///
/// /ideas/{id}                                      get, delete
/// /ideas/{id}/votes                                list, cast
/// /ideas/{id}/votes/{user_id}                      retract
///
/// /groups/{id}                                     get with members
/// /groups/{id}/reviews                             list, create
///
/// /questions/{id}                                  delete
///
/// /users                                           list (?role=), create
/// /users/{id}                                      get
/// /users/{id}/notifications                        list (?unread_only=)
///
/// /notifications                                   create
/// /notifications/{id}/read                         mark read
///
/// /group-assignment                                form groups for one theme
/// /group-assignment/batch                          form groups for all eligible themes
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/themes", themes::router())
        .nest("/ideas", ideas::router())
        .nest("/groups", groups::router())
        .nest("/questions", questions::router())
        .nest("/users", users::router())
        .nest("/notifications", notifications::router())
        .nest("/group-assignment", group_assignment::router())
}
