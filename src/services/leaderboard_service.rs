//! Leaderboard aggregator
//!
//! The leaderboard is a pure function of persisted feedback and submission
//! state: recomputing it without intervening writes yields identical
//! ordering and scores. Nothing here is stored.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{FeedbackRepository, SubmissionRepository, TeamRepository},
    error::AppResult,
    models::{LeaderboardEntry, Team, rank_entries, supervisor_average},
    services::ProjectService,
};

/// Leaderboard aggregation service
pub struct LeaderboardService;

impl LeaderboardService {
    /// Compute the ranked leaderboard for a project.
    ///
    /// Per team: supervisor average across all scored submissions (0 when
    /// none), the most recent admin score (0 when none), final score as
    /// their sum, and the earliest final-stage submission time as the
    /// tie-break anchor (teams that never submitted the final stage anchor
    /// at the current time and thus lose ties).
    pub async fn compute_leaderboard(
        pool: &PgPool,
        project_id: &Uuid,
    ) -> AppResult<Vec<LeaderboardEntry>> {
        ProjectService::get_project(pool, project_id).await?;

        let teams = TeamRepository::list_by_project(pool, project_id).await?;

        let entries = futures::future::try_join_all(
            teams.into_iter().map(|team| Self::team_entry(pool, team)),
        )
        .await?;

        Ok(rank_entries(entries))
    }

    async fn team_entry(pool: &PgPool, team: Team) -> AppResult<LeaderboardEntry> {
        let scores = FeedbackRepository::supervisor_scores_for_team(pool, &team.id).await?;
        let supervisor_avg = supervisor_average(&scores);

        let admin_score = FeedbackRepository::latest_admin_score_for_team(pool, &team.id)
            .await?
            .unwrap_or(0.0);

        let submission_time = SubmissionRepository::earliest_final_submission_at(pool, &team.id)
            .await?
            .unwrap_or_else(Utc::now);

        let members = TeamRepository::list_members(pool, &team.id)
            .await?
            .into_iter()
            .map(|m| m.name)
            .collect();

        Ok(LeaderboardEntry {
            rank: 0,
            team_id: team.id,
            team_name: team.name,
            members,
            supervisor_avg,
            admin_score,
            final_score: supervisor_avg + admin_score,
            submission_time,
        })
    }
}
