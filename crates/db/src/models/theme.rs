//! Theme models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use teamform_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `themes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Theme {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub submission_deadline: Option<Timestamp>,
    pub voting_deadline: Timestamp,
    pub review_deadline: Option<Timestamp>,
    pub number_of_groups: i32,
    pub auto_assign_group: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a theme.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTheme {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    pub submission_deadline: Option<Timestamp>,
    pub voting_deadline: Timestamp,
    pub review_deadline: Option<Timestamp>,
    #[validate(range(min = 0))]
    pub number_of_groups: i32,
    pub auto_assign_group: Option<bool>,
}

/// DTO for partially updating a theme.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTheme {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub submission_deadline: Option<Timestamp>,
    pub voting_deadline: Option<Timestamp>,
    pub review_deadline: Option<Timestamp>,
    #[validate(range(min = 0))]
    pub number_of_groups: Option<i32>,
    pub auto_assign_group: Option<bool>,
}
