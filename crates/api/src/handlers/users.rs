use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use teamform_core::error::CoreError;
use teamform_core::roles::validate_role;
use teamform_core::types::DbId;
use teamform_db::models::user::{CreateUser, User};
use teamform_db::repositories::UserRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::UserListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users?role=&limit=&offset=
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<UserListParams>,
) -> AppResult<Json<DataResponse<Vec<User>>>> {
    if let Some(role) = params.role.as_deref() {
        validate_role(role)?;
    }
    let (limit, offset) = params.page();

    let users = UserRepo::list(&state.pool, params.role.as_deref(), limit, offset).await?;
    Ok(Json(DataResponse { data: users }))
}

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<DataResponse<User>>)> {
    input.validate()?;
    if let Some(role) = input.role.as_deref() {
        validate_role(role)?;
    }

    let user = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = user.id, role = %user.role, "User created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<User>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(DataResponse { data: user }))
}
