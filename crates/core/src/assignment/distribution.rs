//! Student distribution across formed groups.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::{GroupCandidate, Membership};
use crate::types::DbId;

/// Remove selected team leads from the eligible pool.
///
/// A team lead already belongs to the group formed from their idea and must
/// not be placed anywhere else.
pub fn exclude_team_leads(students: &[DbId], candidates: &[GroupCandidate]) -> Vec<DbId> {
    let leads: HashSet<DbId> = candidates.iter().map(|c| c.team_lead).collect();
    students
        .iter()
        .copied()
        .filter(|id| !leads.contains(id))
        .collect()
}

/// Spread `pool` across `groups` as evenly as possible.
///
/// The pool is de-duplicated, shuffled with `rng`, and dealt round-robin so
/// group sizes differ by at most one. Nothing is produced when
/// `auto_assign` is off or there are no groups.
pub fn distribute_students<G, R>(
    pool: &[DbId],
    groups: &[G],
    auto_assign: bool,
    rng: &mut R,
) -> Vec<Membership<G>>
where
    G: Copy,
    R: Rng + ?Sized,
{
    if !auto_assign || groups.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::with_capacity(pool.len());
    let mut shuffled: Vec<DbId> = pool.iter().copied().filter(|id| seen.insert(*id)).collect();
    shuffled.shuffle(rng);

    shuffled
        .into_iter()
        .enumerate()
        .map(|(i, user_id)| Membership {
            group: groups[i % groups.len()],
            user_id,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn pool(size: i64) -> Vec<DbId> {
        (1..=size).collect()
    }

    fn sizes(memberships: &[Membership<DbId>]) -> HashMap<DbId, usize> {
        let mut counts = HashMap::new();
        for m in memberships {
            *counts.entry(m.group).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn balanced_for_all_small_shapes() {
        for students in 0..25_i64 {
            for group_count in 1..7_i64 {
                let groups: Vec<DbId> = (1000..1000 + group_count).collect();
                let result = distribute_students(&pool(students), &groups, true, &mut rng(7));

                assert_eq!(result.len(), students as usize);

                let floor = students / group_count;
                let ceil = floor + i64::from(students % group_count != 0);
                let counts = sizes(&result);
                for g in &groups {
                    let n = counts.get(g).copied().unwrap_or(0) as i64;
                    assert!(
                        n == floor || n == ceil,
                        "P={students} G={group_count}: group {g} got {n}"
                    );
                }

                let unique: HashSet<DbId> = result.iter().map(|m| m.user_id).collect();
                assert_eq!(unique.len(), result.len());
            }
        }
    }

    #[test]
    fn seven_students_two_groups_split_four_three() {
        let result = distribute_students(&pool(7), &[10_i64, 20], true, &mut rng(1));
        let counts = sizes(&result);
        let mut split: Vec<usize> = counts.values().copied().collect();
        split.sort_unstable();
        assert_eq!(split, vec![3, 4]);
    }

    #[test]
    fn no_groups_yields_nothing() {
        let groups: [DbId; 0] = [];
        assert!(distribute_students(&pool(5), &groups, true, &mut rng(1)).is_empty());
    }

    #[test]
    fn disabled_auto_assign_yields_nothing() {
        assert!(distribute_students(&pool(10), &[1_i64, 2], false, &mut rng(1)).is_empty());
    }

    #[test]
    fn duplicate_ids_are_placed_once() {
        let result = distribute_students(&[1, 2, 2, 3, 1], &[9_i64], true, &mut rng(3));
        let mut users: Vec<DbId> = result.iter().map(|m| m.user_id).collect();
        users.sort_unstable();
        assert_eq!(users, vec![1, 2, 3]);
    }

    #[test]
    fn same_seed_same_assignment() {
        let groups = [1_i64, 2, 3];
        let first = distribute_students(&pool(30), &groups, true, &mut rng(99));
        let second = distribute_students(&pool(30), &groups, true, &mut rng(99));
        assert_eq!(first, second);
    }

    #[test]
    fn team_leads_are_excluded() {
        let candidates = vec![
            GroupCandidate {
                theme_id: 1,
                idea_id: 1,
                group_name: "A".into(),
                team_lead: 2,
            },
            GroupCandidate {
                theme_id: 1,
                idea_id: 2,
                group_name: "B".into(),
                team_lead: 4,
            },
        ];
        assert_eq!(exclude_team_leads(&pool(5), &candidates), vec![1, 3, 5]);
    }
}
