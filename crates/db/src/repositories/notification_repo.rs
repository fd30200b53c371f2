//! Repository for the `notifications` table.

use sqlx::PgPool;
use teamform_core::types::DbId;

use crate::models::notification::{CreateNotification, Notification};

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, user_id, message, is_read, created_at";

pub struct NotificationRepo;

impl NotificationRepo {
    /// List a user's notifications, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications \
             WHERE user_id = $1 AND ($2 = false OR is_read = false) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .bind(unread_only)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        dto: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications (user_id, message) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(dto.user_id)
            .bind(&dto.message)
            .fetch_one(pool)
            .await
    }

    /// Mark a notification read. Returns the updated row, or `None` if not found.
    pub async fn mark_read(pool: &PgPool, id: DbId) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "UPDATE notifications SET is_read = true WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
