//! Idea ranking.

use super::IdeaTally;

/// Order ideas for group-lead selection.
///
/// Most votes first; among equal tallies the earlier submission wins. Ideas
/// equal on both keys keep their input order (the sort is stable).
pub fn rank_ideas(mut ideas: Vec<IdeaTally>) -> Vec<IdeaTally> {
    ideas.sort_by(|a, b| {
        b.vote_count
            .cmp(&a.vote_count)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
    ideas
}
