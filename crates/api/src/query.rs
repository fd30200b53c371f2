//! Shared query parameter types for API handlers.

use serde::Deserialize;
use teamform_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};

/// Clamped `(limit, offset)` pair ready to bind.
fn resolve(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    (
        clamp_limit(limit, DEFAULT_LIMIT, MAX_LIMIT),
        clamp_offset(offset),
    )
}

/// Query parameters for `GET /users`.
#[derive(Debug, Deserialize)]
pub struct UserListParams {
    /// Only return users with this role.
    pub role: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl UserListParams {
    pub fn page(&self) -> (i64, i64) {
        resolve(self.limit, self.offset)
    }
}

/// Query parameters for `GET /users/{id}/notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    /// If `true`, return only unread notifications.
    #[serde(default)]
    pub unread_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl NotificationQuery {
    pub fn page(&self) -> (i64, i64) {
        resolve(self.limit, self.offset)
    }
}
