//! Repository for the `groups` and `group_members` tables.
//!
//! Groups are read-only here. Rows are written by
//! [`FormationRepo::commit`](super::FormationRepo::commit).

use sqlx::PgPool;
use teamform_core::types::DbId;

use crate::models::group::{Group, GroupMemberDetail};

/// Column list for `groups` queries.
const COLUMNS: &str = "id, theme_id, idea_id, group_name, team_lead, created_at";

/// Provides read access to formed groups.
pub struct GroupRepo;

impl GroupRepo {
    /// List a theme's groups in creation (rank) order.
    pub async fn list_for_theme(pool: &PgPool, theme_id: DbId) -> Result<Vec<Group>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM groups WHERE theme_id = $1 ORDER BY id");
        sqlx::query_as::<_, Group>(&query)
            .bind(theme_id)
            .fetch_all(pool)
            .await
    }

    /// Find a group by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Group>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM groups WHERE id = $1");
        sqlx::query_as::<_, Group>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a group's members joined with their user records.
    pub async fn list_members(
        pool: &PgPool,
        group_id: DbId,
    ) -> Result<Vec<GroupMemberDetail>, sqlx::Error> {
        sqlx::query_as::<_, GroupMemberDetail>(
            "SELECT gm.group_id, gm.user_id, u.name, u.email, gm.created_at AS joined_at \
             FROM group_members gm \
             JOIN users u ON u.id = gm.user_id \
             WHERE gm.group_id = $1 \
             ORDER BY gm.id",
        )
        .bind(group_id)
        .fetch_all(pool)
        .await
    }

    /// Count the groups stored for a theme.
    pub async fn count_for_theme(pool: &PgPool, theme_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM groups WHERE theme_id = $1")
            .bind(theme_id)
            .fetch_one(pool)
            .await
    }
}
