//! Notification models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use teamform_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    pub message: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a notification.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNotification {
    pub user_id: DbId,
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}
