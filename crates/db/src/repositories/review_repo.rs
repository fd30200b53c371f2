//! Repository for the `reviews` table.

use sqlx::PgPool;
use teamform_core::types::DbId;

use crate::models::review::{CreateReview, Review};

/// Column list for `reviews` queries.
const COLUMNS: &str = "id, group_id, reviewer_id, reviewee_id, rating, comment, created_at";

/// Provides peer review storage.
pub struct ReviewRepo;

impl ReviewRepo {
    /// List the reviews written inside a group.
    pub async fn list_for_group(pool: &PgPool, group_id: DbId) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE group_id = $1 ORDER BY id");
        sqlx::query_as::<_, Review>(&query)
            .bind(group_id)
            .fetch_all(pool)
            .await
    }

    /// Record a review. One review per (group, reviewer, reviewee).
    pub async fn create(
        pool: &PgPool,
        group_id: DbId,
        dto: &CreateReview,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (group_id, reviewer_id, reviewee_id, rating, comment) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(group_id)
            .bind(dto.reviewer_id)
            .bind(dto.reviewee_id)
            .bind(dto.rating)
            .bind(&dto.comment)
            .fetch_one(pool)
            .await
    }
}
