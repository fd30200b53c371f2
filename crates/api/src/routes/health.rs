use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use teamform_db::repositories::FormationRepo;

use crate::state::AppState;

/// Liveness plus the schema and assignment backlog of this instance.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable or behind.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Every migration compiled into this build has been applied.
    pub schema_current: bool,
    /// Themes past their voting deadline that still await group formation.
    /// Absent when the database could not be queried.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub themes_awaiting_assignment: Option<usize>,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = teamform_db::health_check(&state.pool).await.is_ok();

    let schema_current = match teamform_db::schema_status(&state.pool).await {
        Ok(schema) => schema.is_current(),
        Err(e) => {
            tracing::warn!(error = %e, "Could not read migration status");
            false
        }
    };

    let themes_awaiting_assignment = FormationRepo::list_eligible_themes(&state.pool, Utc::now())
        .await
        .map(|themes| themes.len())
        .ok();

    let status = if db_healthy && schema_current {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_current,
        themes_awaiting_assignment,
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
