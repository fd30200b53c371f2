//! Repository for the `ideas` table.

use sqlx::PgPool;
use teamform_core::types::DbId;

use crate::models::idea::{CreateIdea, Idea, IdeaWithVotes};

/// Column list for `ideas` queries.
const COLUMNS: &str = "id, theme_id, submitted_by, idea_name, description, created_at";

/// Provides CRUD operations for ideas.
pub struct IdeaRepo;

impl IdeaRepo {
    /// List a theme's ideas with their vote counts, in submission order.
    pub async fn list_for_theme(
        pool: &PgPool,
        theme_id: DbId,
    ) -> Result<Vec<IdeaWithVotes>, sqlx::Error> {
        sqlx::query_as::<_, IdeaWithVotes>(
            "SELECT i.id, i.theme_id, i.submitted_by, i.idea_name, i.description, \
                    i.created_at, COUNT(v.id) AS vote_count \
             FROM ideas i \
             LEFT JOIN votes v ON v.idea_id = i.id \
             WHERE i.theme_id = $1 \
             GROUP BY i.id \
             ORDER BY i.created_at, i.id",
        )
        .bind(theme_id)
        .fetch_all(pool)
        .await
    }

    /// Find an idea by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Idea>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ideas WHERE id = $1");
        sqlx::query_as::<_, Idea>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Submit an idea under a theme.
    pub async fn create(
        pool: &PgPool,
        theme_id: DbId,
        dto: &CreateIdea,
    ) -> Result<Idea, sqlx::Error> {
        let query = format!(
            "INSERT INTO ideas (theme_id, submitted_by, idea_name, description) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Idea>(&query)
            .bind(theme_id)
            .bind(dto.submitted_by)
            .bind(&dto.idea_name)
            .bind(&dto.description)
            .fetch_one(pool)
            .await
    }

    /// Delete an idea. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ideas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
