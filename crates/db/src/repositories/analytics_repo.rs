//! Raw per-theme counts for the admin dashboard.

use sqlx::{FromRow, PgPool};
use teamform_core::analytics::{IdeaVotes, ThemeActivity};
use teamform_core::roles::ROLE_STUDENT;
use teamform_core::types::DbId;

#[derive(FromRow)]
struct ActivityCounts {
    distinct_voters: i64,
    student_count: i64,
    group_count: i64,
    assigned_students: i64,
    review_count: i64,
    rating_sum: i64,
}

pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Load the counts [`teamform_core::analytics::summarize`] works from.
    pub async fn load_activity(pool: &PgPool, theme_id: DbId) -> Result<ThemeActivity, sqlx::Error> {
        let vote_counts: Vec<(DbId, i64)> = sqlx::query_as(
            "SELECT i.id, COUNT(v.id) FROM ideas i \
             LEFT JOIN votes v ON v.idea_id = i.id \
             WHERE i.theme_id = $1 \
             GROUP BY i.id \
             ORDER BY i.id",
        )
        .bind(theme_id)
        .fetch_all(pool)
        .await?;

        let counts = sqlx::query_as::<_, ActivityCounts>(
            "SELECT \
                 (SELECT COUNT(DISTINCT v.voted_by) FROM votes v \
                  JOIN ideas i ON i.id = v.idea_id WHERE i.theme_id = $1) AS distinct_voters, \
                 (SELECT COUNT(*) FROM users WHERE role = $2) AS student_count, \
                 (SELECT COUNT(*) FROM groups WHERE theme_id = $1) AS group_count, \
                 (SELECT COUNT(*) FROM ( \
                      SELECT gm.user_id FROM group_members gm \
                      JOIN groups g ON g.id = gm.group_id WHERE g.theme_id = $1 \
                      UNION \
                      SELECT team_lead FROM groups WHERE theme_id = $1) placed \
                  JOIN users u ON u.id = placed.user_id WHERE u.role = $2) AS assigned_students, \
                 (SELECT COUNT(*) FROM reviews r \
                  JOIN groups g ON g.id = r.group_id WHERE g.theme_id = $1) AS review_count, \
                 (SELECT COALESCE(SUM(r.rating), 0)::BIGINT FROM reviews r \
                  JOIN groups g ON g.id = r.group_id WHERE g.theme_id = $1) AS rating_sum",
        )
        .bind(theme_id)
        .bind(ROLE_STUDENT)
        .fetch_one(pool)
        .await?;

        Ok(ThemeActivity {
            vote_counts: vote_counts
                .into_iter()
                .map(|(idea_id, votes)| IdeaVotes { idea_id, votes })
                .collect(),
            distinct_voters: counts.distinct_voters,
            student_count: counts.student_count,
            group_count: counts.group_count,
            assigned_students: counts.assigned_students,
            review_count: counts.review_count,
            rating_sum: counts.rating_sum,
        })
    }
}
