//! Review questionnaire models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use teamform_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub theme_id: DbId,
    pub question: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// DTO for adding a question to a theme's review form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestion {
    #[validate(length(min = 1, max = 2000))]
    pub question: String,
    pub sort_order: Option<i32>,
}
