//! PostgreSQL implementation of the assignment engine's storage seam.

use teamform_core::assignment::error::StoreError;
use teamform_core::assignment::{
    FormationOutcome, FormationPlan, FormationStore, IdeaTally, ThemeSettings, ThemeSnapshot,
};
use teamform_core::types::{DbId, Timestamp};

use crate::repositories::{FormationRepo, GroupRepo, IdeaRepo, ThemeRepo, UserRepo};
use crate::DbPool;

#[derive(Debug, thiserror::Error)]
pub enum FormationStoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Membership references group slot {slot} but the plan has {groups} groups")]
    InvalidPlan { slot: usize, groups: usize },
}

/// [`FormationStore`] backed by the shared connection pool.
#[derive(Debug, Clone)]
pub struct PgFormationStore {
    pool: DbPool,
}

impl PgFormationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn check_slots(plan: &FormationPlan) -> Result<(), FormationStoreError> {
    let groups = plan.candidates.len();
    match plan.memberships.iter().find(|m| m.group >= groups) {
        Some(m) => Err(FormationStoreError::InvalidPlan {
            slot: m.group,
            groups,
        }),
        None => Ok(()),
    }
}

impl FormationStore for PgFormationStore {
    async fn load_theme(&self, theme_id: DbId) -> Result<Option<ThemeSnapshot>, StoreError> {
        let Some(theme) = ThemeRepo::find_by_id(&self.pool, theme_id).await? else {
            return Ok(None);
        };

        let ideas = IdeaRepo::list_for_theme(&self.pool, theme_id)
            .await?
            .into_iter()
            .map(IdeaTally::from)
            .collect();
        let existing_groups = GroupRepo::count_for_theme(&self.pool, theme_id).await?;

        Ok(Some(ThemeSnapshot {
            theme: ThemeSettings {
                theme_id: theme.id,
                title: theme.title,
                voting_deadline: theme.voting_deadline,
                number_of_groups: theme.number_of_groups,
                auto_assign_group: theme.auto_assign_group,
            },
            ideas,
            existing_groups,
        }))
    }

    async fn list_eligible_students(&self, theme_id: DbId) -> Result<Vec<DbId>, StoreError> {
        Ok(UserRepo::list_eligible_students(&self.pool, theme_id).await?)
    }

    async fn list_eligible_themes(&self, now: Timestamp) -> Result<Vec<DbId>, StoreError> {
        Ok(FormationRepo::list_eligible_themes(&self.pool, now).await?)
    }

    async fn commit_formation(
        &self,
        theme_id: DbId,
        plan: FormationPlan,
    ) -> Result<FormationOutcome, StoreError> {
        check_slots(&plan)?;

        let outcome = match FormationRepo::commit(&self.pool, theme_id, &plan).await? {
            Some(groups) => FormationOutcome::Committed(groups),
            None => FormationOutcome::AlreadyFormed,
        };
        Ok(outcome)
    }
}
