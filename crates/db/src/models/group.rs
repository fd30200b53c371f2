//! Group and membership models.
//!
//! Groups are only ever written by the assignment engine, so there are no
//! create/update DTOs here.

use serde::Serialize;
use sqlx::FromRow;
use teamform_core::types::{DbId, Timestamp};

/// A row from the `groups` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Group {
    pub id: DbId,
    pub theme_id: DbId,
    pub idea_id: DbId,
    pub group_name: String,
    pub team_lead: DbId,
    pub created_at: Timestamp,
}

/// A group member joined with their user record.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GroupMemberDetail {
    pub group_id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub joined_at: Timestamp,
}

/// A group together with its members.
#[derive(Debug, Clone, Serialize)]
pub struct GroupWithMembers {
    #[serde(flatten)]
    pub group: Group,
    pub members: Vec<GroupMemberDetail>,
}
