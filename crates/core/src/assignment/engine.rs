//! Assignment orchestrator shared by the on-demand and batch triggers.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::distribution::{distribute_students, exclude_team_leads};
use super::formation::form_groups;
use super::ranking::rank_ideas;
use super::{
    AssignmentError, FormationOutcome, FormationPlan, FormationStore, FormedGroup, ThemeSnapshot,
};
use crate::types::{DbId, Timestamp};

/// Default upper bound on the time spent on one theme in batch mode.
pub const DEFAULT_THEME_TIMEOUT: Duration = Duration::from_secs(60);

/// Engine tuning knobs.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Per-theme time limit in batch mode.
    pub theme_timeout: Duration,
    /// Seed for the shuffle generator. `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            theme_timeout: DEFAULT_THEME_TIMEOUT,
            rng_seed: None,
        }
    }
}

/// Counters from one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Themes that matched the batch eligibility query.
    pub eligible: usize,
    /// Themes processed without error (including those with nothing to form).
    pub completed: usize,
    /// Themes claimed concurrently by another run.
    pub skipped: usize,
    /// Themes whose processing failed or timed out.
    pub failed: usize,
    pub groups_created: usize,
    pub memberships_created: usize,
}

/// Run all three pure stages for one theme.
pub fn build_plan<R>(snapshot: &ThemeSnapshot, students: &[DbId], rng: &mut R) -> FormationPlan
where
    R: Rng + ?Sized,
{
    let theme = &snapshot.theme;
    let ranked = rank_ideas(snapshot.ideas.clone());
    let candidates = form_groups(theme.theme_id, &ranked, theme.number_of_groups);

    let pool = exclude_team_leads(students, &candidates);
    let slots: Vec<usize> = (0..candidates.len()).collect();
    let memberships = distribute_students(&pool, &slots, theme.auto_assign_group, rng);

    FormationPlan {
        candidates,
        memberships,
    }
}

/// Forms groups for themes whose voting has closed.
pub struct AssignmentEngine<S> {
    store: S,
    rng: Mutex<StdRng>,
    theme_timeout: Duration,
}

impl<S: FormationStore> AssignmentEngine<S> {
    pub fn new(store: S, settings: EngineSettings) -> Self {
        let rng = match settings.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            store,
            rng: Mutex::new(rng),
            theme_timeout: settings.theme_timeout,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Form groups for a single, explicitly requested theme.
    pub async fn assign_theme(
        &self,
        theme_id: Option<DbId>,
        now: Timestamp,
    ) -> Result<Vec<FormedGroup>, AssignmentError> {
        let theme_id = theme_id
            .ok_or_else(|| AssignmentError::Validation("theme_id is required".to_string()))?;

        self.form_theme(theme_id, now).await
    }

    /// Form groups for every eligible theme.
    ///
    /// A failing or slow theme is logged and counted; it never stops the
    /// batch. Only a failure to list eligible themes is returned.
    pub async fn run_batch(&self, now: Timestamp) -> Result<BatchReport, AssignmentError> {
        let themes = self
            .store
            .list_eligible_themes(now)
            .await
            .map_err(AssignmentError::Storage)?;

        let mut report = BatchReport {
            eligible: themes.len(),
            ..BatchReport::default()
        };

        for theme_id in themes {
            let result = tokio::time::timeout(self.theme_timeout, self.form_theme(theme_id, now))
                .await
                .unwrap_or_else(|_| {
                    Err(AssignmentError::Timeout {
                        theme_id,
                        secs: self.theme_timeout.as_secs(),
                    })
                });

            match result {
                Ok(groups) => {
                    report.completed += 1;
                    report.groups_created += groups.len();
                    report.memberships_created +=
                        groups.iter().map(|g| g.members.len()).sum::<usize>();
                }
                Err(AssignmentError::AlreadyFormed { .. }) => {
                    report.skipped += 1;
                    tracing::info!(theme_id, "Theme already formed, skipping");
                }
                Err(source) => {
                    report.failed += 1;
                    let err = AssignmentError::PartialFailure {
                        theme_id,
                        source: Box::new(source),
                    };
                    tracing::error!(theme_id, error = %err, "Batch group assignment failed");
                }
            }
        }

        tracing::info!(
            eligible = report.eligible,
            completed = report.completed,
            skipped = report.skipped,
            failed = report.failed,
            groups_created = report.groups_created,
            "Batch group assignment finished",
        );

        Ok(report)
    }

    /// Compute the write set for a snapshot using a generator drawn from the
    /// engine's seeded source.
    pub fn plan(&self, snapshot: &ThemeSnapshot, students: &[DbId]) -> FormationPlan {
        let mut rng = self.child_rng();
        build_plan(snapshot, students, &mut rng)
    }

    async fn form_theme(
        &self,
        theme_id: DbId,
        now: Timestamp,
    ) -> Result<Vec<FormedGroup>, AssignmentError> {
        let snapshot = self
            .store
            .load_theme(theme_id)
            .await
            .map_err(AssignmentError::Storage)?
            .ok_or(AssignmentError::NotFound { theme_id })?;

        if now < snapshot.theme.voting_deadline {
            return Err(AssignmentError::Precondition { theme_id });
        }
        if snapshot.existing_groups > 0 {
            return Err(AssignmentError::AlreadyFormed { theme_id });
        }

        let students = self
            .store
            .list_eligible_students(theme_id)
            .await
            .map_err(AssignmentError::Storage)?;

        let plan = self.plan(&snapshot, &students);
        if plan.is_empty() {
            tracing::info!(
                theme_id,
                ideas = snapshot.ideas.len(),
                number_of_groups = snapshot.theme.number_of_groups,
                "No groups to form",
            );
            return Ok(Vec::new());
        }

        match self
            .store
            .commit_formation(theme_id, plan)
            .await
            .map_err(AssignmentError::Storage)?
        {
            FormationOutcome::Committed(groups) => {
                tracing::info!(
                    theme_id,
                    title = %snapshot.theme.title,
                    groups = groups.len(),
                    members = groups.iter().map(|g| g.members.len()).sum::<usize>(),
                    "Groups formed",
                );
                Ok(groups)
            }
            FormationOutcome::AlreadyFormed => Err(AssignmentError::AlreadyFormed { theme_id }),
        }
    }

    fn child_rng(&self) -> StdRng {
        let mut parent = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        StdRng::seed_from_u64(parent.random())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use assert_matches::assert_matches;
    use chrono::{Duration as ChronoDuration, TimeZone, Utc};

    use super::*;
    use crate::assignment::error::StoreError;
    use crate::assignment::{IdeaTally, Membership, ThemeSettings};

    // -- In-memory store ------------------------------------------------------

    #[derive(Default)]
    struct MemoryState {
        themes: HashMap<DbId, ThemeSettings>,
        ideas: HashMap<DbId, Vec<IdeaTally>>,
        students: Vec<DbId>,
        groups: Vec<FormedGroup>,
        memberships: Vec<Membership<DbId>>,
        formations: HashSet<DbId>,
        next_group_id: DbId,
        /// Themes whose snapshot load fails.
        broken: HashSet<DbId>,
        /// Themes whose commit never finishes in time.
        slow: HashSet<DbId>,
        /// Report zero existing groups regardless of state.
        stale_snapshots: bool,
    }

    #[derive(Default)]
    struct MemoryStore {
        state: Mutex<MemoryState>,
    }

    impl MemoryStore {
        fn with<T>(&self, f: impl FnOnce(&mut MemoryState) -> T) -> T {
            f(&mut self.state.lock().unwrap())
        }

        fn group_count(&self) -> usize {
            self.with(|s| s.groups.len())
        }

        fn membership_count(&self) -> usize {
            self.with(|s| s.memberships.len())
        }
    }

    impl FormationStore for MemoryStore {
        async fn load_theme(&self, theme_id: DbId) -> Result<Option<ThemeSnapshot>, StoreError> {
            self.with(|s| {
                if s.broken.contains(&theme_id) {
                    return Err("snapshot query failed".into());
                }
                Ok(s.themes.get(&theme_id).map(|theme| ThemeSnapshot {
                    theme: theme.clone(),
                    ideas: s.ideas.get(&theme_id).cloned().unwrap_or_default(),
                    existing_groups: if s.stale_snapshots {
                        0
                    } else {
                        s.groups.iter().filter(|g| g.theme_id == theme_id).count() as i64
                    },
                }))
            })
        }

        async fn list_eligible_students(&self, theme_id: DbId) -> Result<Vec<DbId>, StoreError> {
            Ok(self.with(|s| {
                let placed: HashSet<DbId> = s
                    .groups
                    .iter()
                    .filter(|g| g.theme_id == theme_id)
                    .flat_map(|g| g.members.iter().copied().chain([g.team_lead]))
                    .collect();
                s.students
                    .iter()
                    .copied()
                    .filter(|id| !placed.contains(id))
                    .collect()
            }))
        }

        async fn list_eligible_themes(&self, now: Timestamp) -> Result<Vec<DbId>, StoreError> {
            Ok(self.with(|s| {
                let mut ids: Vec<DbId> = s
                    .themes
                    .values()
                    .filter(|t| t.voting_deadline < now)
                    .filter(|t| !s.formations.contains(&t.theme_id))
                    .filter(|t| !s.groups.iter().any(|g| g.theme_id == t.theme_id))
                    .map(|t| t.theme_id)
                    .collect();
                ids.sort_unstable();
                ids
            }))
        }

        async fn commit_formation(
            &self,
            theme_id: DbId,
            plan: FormationPlan,
        ) -> Result<FormationOutcome, StoreError> {
            if self.with(|s| s.slow.contains(&theme_id)) {
                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            }

            Ok(self.with(|s| {
                let already = s.formations.contains(&theme_id)
                    || s.groups.iter().any(|g| g.theme_id == theme_id);
                if already {
                    return FormationOutcome::AlreadyFormed;
                }
                s.formations.insert(theme_id);

                let mut created: Vec<FormedGroup> = plan
                    .candidates
                    .iter()
                    .map(|c| {
                        s.next_group_id += 1;
                        FormedGroup {
                            id: s.next_group_id,
                            theme_id,
                            idea_id: c.idea_id,
                            group_name: c.group_name.clone(),
                            team_lead: c.team_lead,
                            members: Vec::new(),
                        }
                    })
                    .collect();

                for m in &plan.memberships {
                    let group = &mut created[m.group];
                    group.members.push(m.user_id);
                    s.memberships.push(Membership {
                        group: group.id,
                        user_id: m.user_id,
                    });
                }

                s.groups.extend(created.iter().cloned());
                FormationOutcome::Committed(created)
            }))
        }
    }

    // -- Fixtures -------------------------------------------------------------

    fn base_time() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn after_voting() -> Timestamp {
        base_time() + ChronoDuration::days(1)
    }

    fn theme(theme_id: DbId, number_of_groups: i32, auto_assign_group: bool) -> ThemeSettings {
        ThemeSettings {
            theme_id,
            title: format!("Theme {theme_id}"),
            voting_deadline: base_time(),
            number_of_groups,
            auto_assign_group,
        }
    }

    fn idea(idea_id: DbId, submitted_by: DbId, votes: i64, minute: i64) -> IdeaTally {
        IdeaTally {
            idea_id,
            idea_name: format!("Idea {idea_id}"),
            submitted_by,
            created_at: base_time() - ChronoDuration::days(3) + ChronoDuration::minutes(minute),
            vote_count: votes,
        }
    }

    fn engine(store: MemoryStore) -> AssignmentEngine<MemoryStore> {
        AssignmentEngine::new(
            store,
            EngineSettings {
                theme_timeout: std::time::Duration::from_millis(200),
                rng_seed: Some(42),
            },
        )
    }

    /// Theme 1 with ideas voted [5, 5, 2]; idea 2 was submitted first.
    fn scenario_store(number_of_groups: i32, auto_assign: bool, students: &[DbId]) -> MemoryStore {
        let store = MemoryStore::default();
        store.with(|s| {
            s.themes.insert(1, theme(1, number_of_groups, auto_assign));
            s.ideas.insert(
                1,
                vec![idea(1, 501, 5, 30), idea(2, 502, 5, 10), idea(3, 503, 2, 0)],
            );
            s.students = students.to_vec();
        });
        store
    }

    // -- Scenarios ------------------------------------------------------------

    #[tokio::test]
    async fn tie_broken_by_earliest_submission() {
        let engine = engine(scenario_store(2, false, &[]));
        let groups = engine.assign_theme(Some(1), after_voting()).await.unwrap();

        let idea_ids: Vec<DbId> = groups.iter().map(|g| g.idea_id).collect();
        assert_eq!(idea_ids, vec![2, 1]);
        assert_eq!(groups[0].group_name, "Idea 2");
        assert_eq!(groups[0].team_lead, 502);
        assert_eq!(groups[1].team_lead, 501);
        assert!(groups.iter().all(|g| g.idea_id != 3));
    }

    #[tokio::test]
    async fn no_ideas_forms_nothing_and_succeeds() {
        let store = MemoryStore::default();
        store.with(|s| {
            s.themes.insert(1, theme(1, 3, true));
            s.students = vec![1, 2, 3];
        });
        let engine = engine(store);

        let groups = engine.assign_theme(Some(1), after_voting()).await.unwrap();

        assert!(groups.is_empty());
        assert_eq!(engine.store().group_count(), 0);
        assert_eq!(engine.store().membership_count(), 0);
    }

    #[tokio::test]
    async fn auto_assign_off_creates_groups_only() {
        let students: Vec<DbId> = (1..=10).collect();
        let engine = engine(scenario_store(2, false, &students));

        let groups = engine.assign_theme(Some(1), after_voting()).await.unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(engine.store().group_count(), 2);
        assert_eq!(engine.store().membership_count(), 0);
    }

    #[tokio::test]
    async fn seven_students_split_across_two_groups() {
        let students: Vec<DbId> = (1..=7).collect();
        let engine = engine(scenario_store(2, true, &students));

        let groups = engine.assign_theme(Some(1), after_voting()).await.unwrap();

        let mut sizes: Vec<usize> = groups.iter().map(|g| g.members.len()).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![3, 4]);

        let members: Vec<DbId> = groups.iter().flat_map(|g| g.members.clone()).collect();
        let unique: HashSet<DbId> = members.iter().copied().collect();
        assert_eq!(members.len(), 7);
        assert_eq!(unique.len(), 7);
        assert_eq!(engine.store().membership_count(), 7);
    }

    #[tokio::test]
    async fn leads_never_member_of_own_group() {
        // Submitters are students too; the three leads must be left out.
        let students: Vec<DbId> = [501, 502, 503].into_iter().chain(1..=20).collect();
        let engine = engine(scenario_store(3, true, &students));

        let groups = engine.assign_theme(Some(1), after_voting()).await.unwrap();

        assert_eq!(groups.len(), 3);
        let leads: HashSet<DbId> = groups.iter().map(|g| g.team_lead).collect();
        for g in &groups {
            assert!(g.members.iter().all(|m| !leads.contains(m)));
        }
        let total: usize = groups.iter().map(|g| g.members.len()).sum();
        assert_eq!(total, 20);
    }

    // -- Idempotence ----------------------------------------------------------

    #[tokio::test]
    async fn second_run_creates_nothing() {
        let students: Vec<DbId> = (1..=7).collect();
        let engine = engine(scenario_store(2, true, &students));

        engine.assign_theme(Some(1), after_voting()).await.unwrap();
        let groups_before = engine.store().group_count();
        let members_before = engine.store().membership_count();

        let second = engine.assign_theme(Some(1), after_voting()).await;

        assert_matches!(second, Err(AssignmentError::AlreadyFormed { theme_id: 1 }));
        assert_eq!(engine.store().group_count(), groups_before);
        assert_eq!(engine.store().membership_count(), members_before);
    }

    #[tokio::test]
    async fn commit_guard_rejects_stale_snapshot() {
        let students: Vec<DbId> = (1..=7).collect();
        let store = scenario_store(2, true, &students);
        store.with(|s| s.stale_snapshots = true);
        let engine = engine(store);

        engine.assign_theme(Some(1), after_voting()).await.unwrap();
        let second = engine.assign_theme(Some(1), after_voting()).await;

        assert_matches!(second, Err(AssignmentError::AlreadyFormed { .. }));
        assert_eq!(engine.store().group_count(), 2);
        assert_eq!(engine.store().membership_count(), 7);
    }

    #[tokio::test]
    async fn concurrent_runs_form_once() {
        let students: Vec<DbId> = (1..=9).collect();
        let store = scenario_store(2, true, &students);
        store.with(|s| s.stale_snapshots = true);
        let engine = engine(store);

        let (a, b) = tokio::join!(
            engine.assign_theme(Some(1), after_voting()),
            engine.assign_theme(Some(1), after_voting()),
        );

        assert_eq!(a.is_ok() as u8 + b.is_ok() as u8, 1);
        assert_eq!(engine.store().group_count(), 2);
        assert_eq!(engine.store().membership_count(), 9);
    }

    // -- On-demand errors -----------------------------------------------------

    #[tokio::test]
    async fn missing_theme_id_is_validation_error() {
        let engine = engine(MemoryStore::default());
        let result = engine.assign_theme(None, after_voting()).await;
        assert_matches!(result, Err(AssignmentError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_theme_is_not_found() {
        let engine = engine(MemoryStore::default());
        let result = engine.assign_theme(Some(99), after_voting()).await;
        assert_matches!(result, Err(AssignmentError::NotFound { theme_id: 99 }));
    }

    #[tokio::test]
    async fn open_voting_is_precondition_error() {
        let engine = engine(scenario_store(2, true, &[1, 2]));
        let before_deadline = base_time() - ChronoDuration::hours(1);

        let result = engine.assign_theme(Some(1), before_deadline).await;

        assert_matches!(result, Err(AssignmentError::Precondition { theme_id: 1 }));
        assert_eq!(engine.store().group_count(), 0);
    }

    #[tokio::test]
    async fn storage_failure_surfaces() {
        let store = scenario_store(2, true, &[]);
        store.with(|s| {
            s.broken.insert(1);
        });
        let engine = engine(store);

        let result = engine.assign_theme(Some(1), after_voting()).await;
        assert_matches!(result, Err(AssignmentError::Storage(_)));
    }

    // -- Batch ----------------------------------------------------------------

    fn batch_store() -> MemoryStore {
        let store = MemoryStore::default();
        store.with(|s| {
            for id in 1..=4 {
                s.themes.insert(id, theme(id, 1, true));
                s.ideas.insert(id, vec![idea(id * 10, 900 + id, 1, 0)]);
            }
            // Voting still open for theme 4.
            s.themes.get_mut(&4).unwrap().voting_deadline = after_voting() + ChronoDuration::days(7);
            s.students = (1..=6).collect();
        });
        store
    }

    #[tokio::test]
    async fn batch_processes_only_closed_themes() {
        let engine = engine(batch_store());

        let report = engine.run_batch(after_voting()).await.unwrap();

        assert_eq!(report.eligible, 3);
        assert_eq!(report.completed, 3);
        assert_eq!(report.failed, 0);
        assert_eq!(report.groups_created, 3);
        assert_eq!(report.memberships_created, 18);
        assert_eq!(engine.store().group_count(), 3);
    }

    #[tokio::test]
    async fn batch_isolates_failing_theme() {
        let store = batch_store();
        store.with(|s| {
            s.broken.insert(2);
        });
        let engine = engine(store);

        let report = engine.run_batch(after_voting()).await.unwrap();

        assert_eq!(report.completed, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(engine.store().group_count(), 2);
    }

    #[tokio::test]
    async fn batch_times_out_slow_theme() {
        let store = batch_store();
        store.with(|s| {
            s.slow.insert(1);
        });
        let engine = engine(store);

        let report = engine.run_batch(after_voting()).await.unwrap();

        assert_eq!(report.failed, 1);
        assert_eq!(report.completed, 2);
        assert!(engine
            .store()
            .with(|s| s.groups.iter().all(|g| g.theme_id != 1)));
    }

    #[tokio::test]
    async fn batch_rerun_finds_nothing() {
        let engine = engine(batch_store());

        engine.run_batch(after_voting()).await.unwrap();
        let report = engine.run_batch(after_voting()).await.unwrap();

        assert_eq!(report, BatchReport::default());
        assert_eq!(engine.store().group_count(), 3);
    }

    // -- Seeding --------------------------------------------------------------

    #[tokio::test]
    async fn same_seed_same_groups() {
        let students: Vec<DbId> = (1..=15).collect();
        let first = engine(scenario_store(3, true, &students))
            .assign_theme(Some(1), after_voting())
            .await
            .unwrap();
        let second = engine(scenario_store(3, true, &students))
            .assign_theme(Some(1), after_voting())
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn build_plan_slots_refer_to_candidates() {
        let snapshot = ThemeSnapshot {
            theme: theme(1, 2, true),
            ideas: vec![idea(1, 501, 3, 0), idea(2, 502, 1, 0)],
            existing_groups: 0,
        };
        let students: Vec<DbId> = (1..=5).collect();
        let plan = build_plan(&snapshot, &students, &mut StdRng::seed_from_u64(3));

        assert_eq!(plan.candidates.len(), 2);
        assert_eq!(plan.memberships.len(), 5);
        assert!(plan.memberships.iter().all(|m| m.group < 2));
    }
}
