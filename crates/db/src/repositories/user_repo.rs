//! Repository for the `users` table.

use sqlx::PgPool;
use teamform_core::roles::ROLE_STUDENT;
use teamform_core::types::DbId;

use crate::models::user::{CreateUser, User};

/// Column list for `users` queries.
const COLUMNS: &str = "id, name, email, role, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// List users, optionally filtered by role, ordered by id.
    pub async fn list(
        pool: &PgPool,
        role: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users \
             WHERE ($1::text IS NULL OR role = $1) \
             ORDER BY id \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(role)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Find a user by their ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a user. The email must be unique (`uq_users_email`).
    pub async fn create(pool: &PgPool, dto: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, role) \
             VALUES ($1, $2, COALESCE($3, '{ROLE_STUDENT}')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&dto.name)
            .bind(&dto.email)
            .bind(&dto.role)
            .fetch_one(pool)
            .await
    }

    /// Students who are neither a member nor the lead of any group under
    /// `theme_id`, ordered by id.
    pub async fn list_eligible_students(
        pool: &PgPool,
        theme_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT u.id FROM users u \
             WHERE u.role = $2 \
               AND NOT EXISTS ( \
                   SELECT 1 FROM group_members gm \
                   JOIN groups g ON g.id = gm.group_id \
                   WHERE g.theme_id = $1 AND gm.user_id = u.id) \
               AND NOT EXISTS ( \
                   SELECT 1 FROM groups g \
                   WHERE g.theme_id = $1 AND g.team_lead = u.id) \
             ORDER BY u.id",
        )
        .bind(theme_id)
        .bind(ROLE_STUDENT)
        .fetch_all(pool)
        .await
    }
}
