//! Handlers for the group assignment triggers.
//!
//! Both endpoints drive the shared [`GroupEngine`](crate::state::GroupEngine).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use teamform_core::assignment::engine::BatchReport;
use teamform_core::assignment::FormedGroup;
use teamform_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /group-assignment`.
#[derive(Debug, Deserialize)]
pub struct AssignGroupsRequest {
    /// Required; a missing id is rejected as a validation error.
    pub theme_id: Option<DbId>,
}

/// Acknowledgment returned by `POST /group-assignment/batch`.
#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub report: BatchReport,
}

/// POST /api/v1/group-assignment
///
/// Form groups for one theme whose voting has closed. Returns the created
/// groups with the members placed into them.
pub async fn assign_groups(
    State(state): State<AppState>,
    payload: Result<Json<AssignGroupsRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<FormedGroup>>>)> {
    let Json(input) = payload?;
    let groups = state.engine.assign_theme(input.theme_id, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: groups })))
}

/// POST /api/v1/group-assignment/batch
///
/// Form groups for every eligible theme. Per-theme failures are logged and
/// counted in the report, not returned as errors.
pub async fn run_batch(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<BatchResponse>>> {
    let report = state.engine.run_batch(Utc::now()).await?;
    Ok(Json(DataResponse {
        data: BatchResponse {
            message: "Group assignment batch completed",
            report,
        },
    }))
}
