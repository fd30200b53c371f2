//! Peer review models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use teamform_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub group_id: DbId,
    pub reviewer_id: DbId,
    pub reviewee_id: DbId,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for submitting a review inside a group.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReview {
    pub reviewer_id: DbId,
    pub reviewee_id: DbId,
    pub rating: i16,
    #[validate(length(max = 5000))]
    pub comment: Option<String>,
}
