//! Repository for the `themes` table.

use sqlx::PgPool;
use teamform_core::types::DbId;

use crate::models::theme::{CreateTheme, Theme, UpdateTheme};

/// Column list for `themes` queries.
const COLUMNS: &str = "\
    id, title, description, submission_deadline, voting_deadline, \
    review_deadline, number_of_groups, auto_assign_group, created_at, updated_at";

/// Provides CRUD operations for themes.
pub struct ThemeRepo;

impl ThemeRepo {
    /// List all themes, most recent voting deadline first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Theme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM themes ORDER BY voting_deadline DESC, id");
        sqlx::query_as::<_, Theme>(&query).fetch_all(pool).await
    }

    /// Find a theme by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Theme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM themes WHERE id = $1");
        sqlx::query_as::<_, Theme>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new theme.
    pub async fn create(pool: &PgPool, dto: &CreateTheme) -> Result<Theme, sqlx::Error> {
        let query = format!(
            "INSERT INTO themes \
                 (title, description, submission_deadline, voting_deadline, \
                  review_deadline, number_of_groups, auto_assign_group) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Theme>(&query)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.submission_deadline)
            .bind(dto.voting_deadline)
            .bind(dto.review_deadline)
            .bind(dto.number_of_groups)
            .bind(dto.auto_assign_group)
            .fetch_one(pool)
            .await
    }

    /// Partially update a theme.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateTheme,
    ) -> Result<Option<Theme>, sqlx::Error> {
        let query = format!(
            "UPDATE themes SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 submission_deadline = COALESCE($4, submission_deadline), \
                 voting_deadline = COALESCE($5, voting_deadline), \
                 review_deadline = COALESCE($6, review_deadline), \
                 number_of_groups = COALESCE($7, number_of_groups), \
                 auto_assign_group = COALESCE($8, auto_assign_group), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Theme>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.submission_deadline)
            .bind(dto.voting_deadline)
            .bind(dto.review_deadline)
            .bind(dto.number_of_groups)
            .bind(dto.auto_assign_group)
            .fetch_optional(pool)
            .await
    }

    /// Delete a theme and everything under it. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM themes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
