//! Repository for the `questions` table.

use sqlx::PgPool;
use teamform_core::types::DbId;

use crate::models::question::{CreateQuestion, Question};

/// Column list for `questions` queries.
const COLUMNS: &str = "id, theme_id, question, sort_order, created_at";

/// Provides CRUD operations for a theme's review questionnaire.
pub struct QuestionRepo;

impl QuestionRepo {
    /// List a theme's questions in display order.
    pub async fn list_for_theme(
        pool: &PgPool,
        theme_id: DbId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions WHERE theme_id = $1 ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(theme_id)
            .fetch_all(pool)
            .await
    }

    /// Add a question. Without an explicit `sort_order` it goes last.
    pub async fn create(
        pool: &PgPool,
        theme_id: DbId,
        dto: &CreateQuestion,
    ) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (theme_id, question, sort_order) \
             VALUES ($1, $2, COALESCE($3, \
                 (SELECT COALESCE(MAX(sort_order) + 1, 0) FROM questions WHERE theme_id = $1))) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(theme_id)
            .bind(&dto.question)
            .bind(dto.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Delete a question. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
