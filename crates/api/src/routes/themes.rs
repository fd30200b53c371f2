//! Route definitions for the `/themes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{groups, ideas, questions, themes};
use crate::state::AppState;

/// Routes mounted at `/themes`.
///
/// ```text
/// GET    /                  -> list_themes
/// POST   /                  -> create_theme
/// GET    /{id}              -> get_theme
/// PUT    /{id}              -> update_theme
/// DELETE /{id}              -> delete_theme
/// GET    /{id}/ideas        -> list_ideas
/// POST   /{id}/ideas        -> create_idea
/// GET    /{id}/groups       -> list_groups
/// GET    /{id}/questions    -> list_questions
/// POST   /{id}/questions    -> create_question
/// GET    /{id}/analytics    -> get_analytics
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(themes::list_themes).post(themes::create_theme))
        .route(
            "/{id}",
            get(themes::get_theme)
                .put(themes::update_theme)
                .delete(themes::delete_theme),
        )
        .route("/{id}/ideas", get(ideas::list_ideas).post(ideas::create_idea))
        .route("/{id}/groups", get(groups::list_groups))
        .route(
            "/{id}/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/{id}/analytics", get(themes::get_analytics))
}
