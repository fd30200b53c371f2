//! Vote models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use teamform_core::types::{DbId, Timestamp};

/// A row from the `votes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vote {
    pub id: DbId,
    pub idea_id: DbId,
    pub voted_by: DbId,
    pub created_at: Timestamp,
}

/// DTO for casting a vote on an idea.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVote {
    pub voted_by: DbId,
}
