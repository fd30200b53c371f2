//! Repository for the `votes` table.

use sqlx::PgPool;
use teamform_core::types::DbId;

use crate::models::vote::Vote;

/// Column list for `votes` queries.
const COLUMNS: &str = "id, idea_id, voted_by, created_at";

/// Provides vote casting and retraction.
pub struct VoteRepo;

impl VoteRepo {
    /// Cast a vote. A second vote by the same user on the same idea violates
    /// `uq_votes_idea_voter`.
    pub async fn create(
        pool: &PgPool,
        idea_id: DbId,
        voted_by: DbId,
    ) -> Result<Vote, sqlx::Error> {
        let query = format!(
            "INSERT INTO votes (idea_id, voted_by) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(idea_id)
            .bind(voted_by)
            .fetch_one(pool)
            .await
    }

    /// List the votes on an idea.
    pub async fn list_for_idea(pool: &PgPool, idea_id: DbId) -> Result<Vec<Vote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM votes WHERE idea_id = $1 ORDER BY created_at");
        sqlx::query_as::<_, Vote>(&query)
            .bind(idea_id)
            .fetch_all(pool)
            .await
    }

    /// Retract a user's vote on an idea. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, idea_id: DbId, voted_by: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM votes WHERE idea_id = $1 AND voted_by = $2")
            .bind(idea_id)
            .bind(voted_by)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
