//! Theme dashboard aggregation.
//!
//! The db layer loads raw counts; this module turns them into the figures
//! shown on the admin dashboard.

use serde::Serialize;

use crate::types::DbId;

/// Vote tally of one idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdeaVotes {
    pub idea_id: DbId,
    pub votes: i64,
}

/// Raw per-theme counts loaded from storage.
#[derive(Debug, Clone, Default)]
pub struct ThemeActivity {
    /// Every idea in the theme; ideas without votes count as 0.
    pub vote_counts: Vec<IdeaVotes>,
    /// Distinct users who cast at least one vote in the theme.
    pub distinct_voters: i64,
    /// Users with the student role.
    pub student_count: i64,
    pub group_count: i64,
    /// Student-role users placed in a group as lead or member.
    pub assigned_students: i64,
    pub review_count: i64,
    /// Sum of all review ratings.
    pub rating_sum: i64,
}

/// Dashboard figures for one theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeAnalytics {
    pub idea_count: usize,
    pub vote_count: i64,
    pub max_votes: i64,
    pub average_votes_per_idea: f64,
    /// Votes per idea, most voted first; ties keep idea id order.
    pub vote_distribution: Vec<IdeaVotes>,
    /// Share of students who voted, `0.0..=1.0`.
    pub voter_participation: f64,
    pub group_count: i64,
    pub assigned_students: i64,
    pub unassigned_students: i64,
    pub review_count: i64,
    /// `None` until the first review arrives.
    pub average_rating: Option<f64>,
}

/// Aggregate raw counts into dashboard figures.
pub fn summarize(activity: &ThemeActivity) -> ThemeAnalytics {
    let idea_count = activity.vote_counts.len();
    let vote_count: i64 = activity.vote_counts.iter().map(|i| i.votes).sum();
    let max_votes = activity.vote_counts.iter().map(|i| i.votes).max().unwrap_or(0);

    let mut vote_distribution = activity.vote_counts.clone();
    vote_distribution.sort_by(|a, b| b.votes.cmp(&a.votes).then(a.idea_id.cmp(&b.idea_id)));

    ThemeAnalytics {
        idea_count,
        vote_count,
        max_votes,
        average_votes_per_idea: ratio(vote_count, idea_count as i64),
        vote_distribution,
        voter_participation: ratio(activity.distinct_voters, activity.student_count).min(1.0),
        group_count: activity.group_count,
        assigned_students: activity.assigned_students,
        unassigned_students: (activity.student_count - activity.assigned_students).max(0),
        review_count: activity.review_count,
        average_rating: (activity.review_count > 0)
            .then(|| ratio(activity.rating_sum, activity.review_count)),
    }
}

fn ratio(numerator: i64, denominator: i64) -> f64 {
    if denominator <= 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tallies(votes: &[i64]) -> Vec<IdeaVotes> {
        votes
            .iter()
            .enumerate()
            .map(|(i, &votes)| IdeaVotes {
                idea_id: i as DbId + 1,
                votes,
            })
            .collect()
    }

    #[test]
    fn empty_theme() {
        let summary = summarize(&ThemeActivity::default());
        assert_eq!(summary.idea_count, 0);
        assert_eq!(summary.vote_count, 0);
        assert_eq!(summary.average_votes_per_idea, 0.0);
        assert_eq!(summary.voter_participation, 0.0);
        assert_eq!(summary.average_rating, None);
        assert!(summary.vote_distribution.is_empty());
    }

    #[test]
    fn sums_and_averages() {
        let summary = summarize(&ThemeActivity {
            vote_counts: tallies(&[5, 5, 2, 0]),
            distinct_voters: 6,
            student_count: 8,
            group_count: 2,
            assigned_students: 7,
            review_count: 4,
            rating_sum: 14,
        });

        assert_eq!(summary.idea_count, 4);
        assert_eq!(summary.vote_count, 12);
        assert_eq!(summary.max_votes, 5);
        assert_eq!(summary.average_votes_per_idea, 3.0);
        assert_eq!(summary.voter_participation, 0.75);
        assert_eq!(summary.unassigned_students, 1);
        assert_eq!(summary.average_rating, Some(3.5));
    }

    #[test]
    fn distribution_lists_every_idea_most_voted_first() {
        let summary = summarize(&ThemeActivity {
            vote_counts: tallies(&[1, 4, 0, 4]),
            ..ThemeActivity::default()
        });

        let order: Vec<(DbId, i64)> = summary
            .vote_distribution
            .iter()
            .map(|i| (i.idea_id, i.votes))
            .collect();
        assert_eq!(order, vec![(2, 4), (4, 4), (1, 1), (3, 0)]);
    }

    #[test]
    fn unassigned_never_negative() {
        let summary = summarize(&ThemeActivity {
            student_count: 2,
            assigned_students: 5,
            ..ThemeActivity::default()
        });
        assert_eq!(summary.unassigned_students, 0);
    }
}
