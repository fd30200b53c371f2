//! Persistence seam for the assignment engine.

use std::future::Future;

use super::error::StoreError;
use super::{FormationOutcome, FormationPlan, ThemeSnapshot};
use crate::types::{DbId, Timestamp};

/// Storage operations the engine depends on.
///
/// Implemented over PostgreSQL in `teamform-db`. Implementations must make
/// [`commit_formation`](Self::commit_formation) atomic: the theme claim, all
/// groups and all memberships commit together or not at all.
pub trait FormationStore: Send + Sync {
    /// Load a theme with its ideas, vote tallies and current group count.
    fn load_theme(
        &self,
        theme_id: DbId,
    ) -> impl Future<Output = Result<Option<ThemeSnapshot>, StoreError>> + Send;

    /// Students not yet placed in any group of the theme.
    fn list_eligible_students(
        &self,
        theme_id: DbId,
    ) -> impl Future<Output = Result<Vec<DbId>, StoreError>> + Send;

    /// Themes whose voting closed before `now` and that have no groups.
    fn list_eligible_themes(
        &self,
        now: Timestamp,
    ) -> impl Future<Output = Result<Vec<DbId>, StoreError>> + Send;

    /// Claim the theme and write the plan.
    ///
    /// Returns [`FormationOutcome::AlreadyFormed`] without writing anything
    /// when the theme already has groups or a formation record.
    fn commit_formation(
        &self,
        theme_id: DbId,
        plan: FormationPlan,
    ) -> impl Future<Output = Result<FormationOutcome, StoreError>> + Send;
}
