//! Group formation from ranked ideas.

use super::{GroupCandidate, IdeaTally};
use crate::types::DbId;

/// Promote the first `number_of_groups` ranked ideas to group candidates.
///
/// The group takes the idea's name and the submitter becomes team lead. The
/// result is capped at the number of ideas; a zero or negative target yields
/// no candidates.
pub fn form_groups(
    theme_id: DbId,
    ranked: &[IdeaTally],
    number_of_groups: i32,
) -> Vec<GroupCandidate> {
    let limit = usize::try_from(number_of_groups).unwrap_or(0);

    ranked
        .iter()
        .take(limit)
        .map(|idea| GroupCandidate {
            theme_id,
            idea_id: idea.idea_id,
            group_name: idea.idea_name.clone(),
            team_lead: idea.submitted_by,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn ideas(count: i64) -> Vec<IdeaTally> {
        let now = Utc::now();
        (0..count)
            .map(|i| IdeaTally {
                idea_id: i + 1,
                idea_name: format!("Idea {}", i + 1),
                submitted_by: 50 + i,
                created_at: now,
                vote_count: count - i,
            })
            .collect()
    }

    #[test]
    fn length_is_min_of_target_and_ideas() {
        for idea_count in 0..6 {
            for target in 0..8 {
                let formed = form_groups(1, &ideas(idea_count), target);
                let expected = (target as usize).min(idea_count as usize);
                assert_eq!(formed.len(), expected, "ideas={idea_count} target={target}");
            }
        }
    }

    #[test]
    fn zero_target_forms_nothing() {
        assert!(form_groups(1, &ideas(3), 0).is_empty());
    }

    #[test]
    fn negative_target_forms_nothing() {
        assert!(form_groups(1, &ideas(3), -2).is_empty());
    }

    #[test]
    fn copies_name_and_lead_from_idea() {
        let formed = form_groups(42, &ideas(3), 2);
        assert_eq!(
            formed[0],
            GroupCandidate {
                theme_id: 42,
                idea_id: 1,
                group_name: "Idea 1".to_string(),
                team_lead: 50,
            }
        );
        assert_eq!(formed[1].idea_id, 2);
        assert_eq!(formed[1].team_lead, 51);
    }
}
