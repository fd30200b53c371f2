//! User models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use teamform_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: Timestamp,
}

/// DTO for creating a user. `role` defaults to `student`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub role: Option<String>,
}
