//! Repository for group formation: the `group_formations` marker plus the
//! group and membership rows written with it.

use sqlx::PgPool;
use teamform_core::assignment::{FormationPlan, FormedGroup};
use teamform_core::types::{DbId, Timestamp};

/// Provides the atomic write path of the assignment engine.
pub struct FormationRepo;

impl FormationRepo {
    /// Themes whose voting closed before `now`, with no groups and no
    /// formation marker, oldest deadline first.
    pub async fn list_eligible_themes(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT t.id FROM themes t \
             WHERE t.voting_deadline < $1 \
               AND NOT EXISTS (SELECT 1 FROM groups g WHERE g.theme_id = t.id) \
               AND NOT EXISTS (SELECT 1 FROM group_formations f WHERE f.theme_id = t.id) \
             ORDER BY t.voting_deadline, t.id",
        )
        .bind(now)
        .fetch_all(pool)
        .await
    }

    /// Claim the theme and write the plan in one transaction.
    ///
    /// The claim inserts the formation marker only when the theme has no
    /// groups. A concurrent claimant blocks on the marker's primary key and
    /// then finds it taken. Returns `None`, with nothing written, when the
    /// claim fails.
    ///
    /// Membership slots must index into `plan.candidates`; callers check this
    /// before committing.
    pub async fn commit(
        pool: &PgPool,
        theme_id: DbId,
        plan: &FormationPlan,
    ) -> Result<Option<Vec<FormedGroup>>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let claimed = sqlx::query(
            "INSERT INTO group_formations (theme_id) \
             SELECT $1 WHERE NOT EXISTS (SELECT 1 FROM groups WHERE theme_id = $1) \
             ON CONFLICT (theme_id) DO NOTHING",
        )
        .bind(theme_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if claimed == 0 {
            tracing::debug!(theme_id, "Formation claim lost, rolling back");
            tx.rollback().await?;
            return Ok(None);
        }

        let mut groups = Vec::with_capacity(plan.candidates.len());
        for candidate in &plan.candidates {
            let id: DbId = sqlx::query_scalar(
                "INSERT INTO groups (theme_id, idea_id, group_name, team_lead) \
                 VALUES ($1, $2, $3, $4) \
                 RETURNING id",
            )
            .bind(candidate.theme_id)
            .bind(candidate.idea_id)
            .bind(&candidate.group_name)
            .bind(candidate.team_lead)
            .fetch_one(&mut *tx)
            .await?;

            groups.push(FormedGroup {
                id,
                theme_id: candidate.theme_id,
                idea_id: candidate.idea_id,
                group_name: candidate.group_name.clone(),
                team_lead: candidate.team_lead,
                members: Vec::new(),
            });
        }

        let mut group_ids = Vec::with_capacity(plan.memberships.len());
        let mut user_ids = Vec::with_capacity(plan.memberships.len());
        for membership in &plan.memberships {
            if let Some(group) = groups.get_mut(membership.group) {
                group.members.push(membership.user_id);
                group_ids.push(group.id);
                user_ids.push(membership.user_id);
            }
        }

        if !user_ids.is_empty() {
            sqlx::query(
                "INSERT INTO group_members (group_id, user_id) \
                 SELECT * FROM UNNEST($1::bigint[], $2::bigint[])",
            )
            .bind(&group_ids)
            .bind(&user_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::debug!(
            theme_id,
            groups = groups.len(),
            memberships = user_ids.len(),
            "Formation committed"
        );
        Ok(Some(groups))
    }
}
