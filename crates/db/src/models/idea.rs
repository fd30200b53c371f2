//! Idea models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use teamform_core::assignment::IdeaTally;
use teamform_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `ideas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Idea {
    pub id: DbId,
    pub theme_id: DbId,
    pub submitted_by: DbId,
    pub idea_name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// An idea with its current vote count, as listed on the voting page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct IdeaWithVotes {
    pub id: DbId,
    pub theme_id: DbId,
    pub submitted_by: DbId,
    pub idea_name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub vote_count: i64,
}

impl From<IdeaWithVotes> for IdeaTally {
    fn from(row: IdeaWithVotes) -> Self {
        Self {
            idea_id: row.id,
            idea_name: row.idea_name,
            submitted_by: row.submitted_by,
            created_at: row.created_at,
            vote_count: row.vote_count,
        }
    }
}

/// DTO for submitting an idea under a theme.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateIdea {
    pub submitted_by: DbId,
    #[validate(length(min = 1, max = 255))]
    pub idea_name: String,
    pub description: Option<String>,
}
