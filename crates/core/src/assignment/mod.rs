//! Group auto-assignment engine.
//!
//! Three pure stages feed one orchestrator:
//!
//! 1. [`ranking::rank_ideas`] orders a theme's ideas by votes, then age.
//! 2. [`formation::form_groups`] promotes the top `number_of_groups` ideas.
//! 3. [`distribution::distribute_students`] spreads the remaining students
//!    across the formed groups round-robin after a seeded shuffle.
//!
//! [`engine::AssignmentEngine`] drives the stages against a
//! [`store::FormationStore`] and is shared by the on-demand and batch
//! triggers.

pub mod distribution;
pub mod engine;
pub mod error;
pub mod formation;
pub mod ranking;
pub mod store;

use serde::Serialize;

use crate::types::{DbId, Timestamp};

pub use engine::{AssignmentEngine, BatchReport, EngineSettings};
pub use error::AssignmentError;
pub use store::FormationStore;

/// Theme fields the engine reads.
#[derive(Debug, Clone)]
pub struct ThemeSettings {
    pub theme_id: DbId,
    pub title: String,
    pub voting_deadline: Timestamp,
    pub number_of_groups: i32,
    pub auto_assign_group: bool,
}

/// An idea together with its vote tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaTally {
    pub idea_id: DbId,
    pub idea_name: String,
    pub submitted_by: DbId,
    pub created_at: Timestamp,
    pub vote_count: i64,
}

/// Everything the engine needs to know about one theme before planning.
#[derive(Debug, Clone)]
pub struct ThemeSnapshot {
    pub theme: ThemeSettings,
    pub ideas: Vec<IdeaTally>,
    /// Groups already stored for the theme.
    pub existing_groups: i64,
}

/// A group that will be created from a winning idea.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCandidate {
    pub theme_id: DbId,
    pub idea_id: DbId,
    pub group_name: String,
    pub team_lead: DbId,
}

/// A student placed into a group.
///
/// `G` identifies the group: a slot index into the candidate list while
/// planning, a storage id once groups exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Membership<G> {
    pub group: G,
    pub user_id: DbId,
}

/// The complete write set for one theme.
#[derive(Debug, Clone, Default)]
pub struct FormationPlan {
    pub candidates: Vec<GroupCandidate>,
    /// Memberships keyed by index into `candidates`.
    pub memberships: Vec<Membership<usize>>,
}

impl FormationPlan {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// A group as persisted, with the members placed into it by this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormedGroup {
    pub id: DbId,
    pub theme_id: DbId,
    pub idea_id: DbId,
    pub group_name: String,
    pub team_lead: DbId,
    pub members: Vec<DbId>,
}

/// Result of an atomic commit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormationOutcome {
    Committed(Vec<FormedGroup>),
    /// Another run claimed the theme first; nothing was written.
    AlreadyFormed,
}
