//! Submission and review pipeline
//!
//! Per submission: `uploaded (pending approvals) -> team approved`, with
//! supervisor and admin review recorded independently. Peer votes are
//! re-evaluated inside a transaction that locks the submission row, so two
//! members approving concurrently cannot both observe a stale quorum and
//! lose the approved transition. State commits before any notification
//! intent is emitted.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::SmtpConfig,
    db::repositories::{FeedbackRepository, SubmissionRepository, TeamRepository},
    error::{AppError, AppResult},
    models::{
        ApprovalStatus, NotificationKind, Submission, SubmissionApproval, SubmissionFeedback,
        SubmissionStage, evaluate_quorum,
    },
    services::{NotificationService, TeamService},
    state::Mailer,
    utils::validation,
};

/// Submission pipeline service
pub struct SubmissionService;

impl SubmissionService {
    /// Leader uploads a staged submission document.
    ///
    /// A new record is always created; earlier records for the stage stay
    /// in history. One pending approval row is created per non-leader
    /// member. With no other members the quorum is vacuous and the
    /// submission is team-approved immediately.
    #[allow(clippy::too_many_arguments)]
    pub async fn upload(
        pool: &PgPool,
        mailer: Option<(&Mailer, &SmtpConfig)>,
        team_id: &Uuid,
        stage: &str,
        caller_id: &Uuid,
        file_url: &str,
        file_name: &str,
        upload_requires_locked_team: bool,
    ) -> AppResult<Submission> {
        let team = TeamService::get_team(pool, team_id).await?;

        if team.leader_id != *caller_id {
            return Err(AppError::Forbidden(
                "Only the team leader can upload submissions".to_string(),
            ));
        }

        let stage = SubmissionStage::from_str(stage).ok_or_else(|| {
            AppError::InvalidArgument(format!(
                "Invalid stage; must be one of {:?}",
                SubmissionStage::ALL.map(|s| s.as_str())
            ))
        })?;

        let accepts = team
            .status()
            .is_some_and(|s| s.accepts_uploads(upload_requires_locked_team));
        if !accepts {
            return Err(AppError::InvalidState(
                "Team is not accepting submissions in its current status".to_string(),
            ));
        }

        validation::validate_document_ref(file_url, file_name)
            .map_err(|e| AppError::InvalidArgument(e.to_string()))?;

        let members = TeamRepository::list_members(pool, team_id).await?;
        let voters: Vec<&Uuid> = members
            .iter()
            .filter(|m| m.id != *caller_id)
            .map(|m| &m.id)
            .collect();

        let initial_status = if voters.is_empty() {
            ApprovalStatus::Approved
        } else {
            ApprovalStatus::Pending
        };

        let mut tx = pool.begin().await?;

        let submission = SubmissionRepository::create(
            &mut tx,
            team_id,
            stage.as_str(),
            file_url,
            file_name,
            caller_id,
            initial_status.as_str(),
        )
        .await?;

        for &member_id in &voters {
            SubmissionRepository::create_approval(&mut tx, &submission.id, member_id).await?;
        }

        let submission = if initial_status == ApprovalStatus::Approved {
            SubmissionRepository::set_team_approval_status(
                &mut tx,
                &submission.id,
                ApprovalStatus::Approved.as_str(),
                true,
            )
            .await?
        } else {
            submission
        };

        tx.commit().await?;

        // Ask each voter for their approval; intents only, post-commit
        let title = format!("Approval requested: {} ({})", team.name, stage);
        let body = format!(
            "Team {} has a new {} submission awaiting your approval.",
            team.name, stage
        );
        for member_id in voters {
            NotificationService::notify(
                pool,
                mailer,
                member_id,
                NotificationKind::SubmissionForApproval,
                &title,
                &body,
            )
            .await;
        }

        Ok(submission)
    }

    /// Get submission by ID
    pub async fn get_submission(pool: &PgPool, id: &Uuid) -> AppResult<Submission> {
        SubmissionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))
    }

    /// List a team's submission history, newest first
    pub async fn list_team_submissions(pool: &PgPool, team_id: &Uuid) -> AppResult<Vec<Submission>> {
        TeamService::get_team(pool, team_id).await?;
        SubmissionRepository::list_by_team(pool, team_id).await
    }

    /// List approval rows for a submission
    pub async fn list_approvals(
        pool: &PgPool,
        submission_id: &Uuid,
    ) -> AppResult<Vec<SubmissionApproval>> {
        Self::get_submission(pool, submission_id).await?;
        SubmissionRepository::list_approvals(pool, submission_id).await
    }

    /// A member records their approval vote.
    ///
    /// Only members holding an approval row may vote. The quorum is
    /// unanimous; a rejected vote withholds approval without rejecting the
    /// submission, and the leader resolves it by re-uploading.
    pub async fn record_approval(
        pool: &PgPool,
        submission_id: &Uuid,
        member_id: &Uuid,
        approve: bool,
    ) -> AppResult<Submission> {
        let mut tx = pool.begin().await?;

        // Serialize concurrent votes per submission
        let submission = SubmissionRepository::find_by_id_for_update(&mut tx, submission_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        let approval = SubmissionRepository::find_approval(&mut tx, submission_id, member_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("No approval record for this member".to_string())
            })?;

        let vote = if approve {
            ApprovalStatus::Approved
        } else {
            ApprovalStatus::Rejected
        };
        SubmissionRepository::set_approval_status(&mut tx, &approval.id, vote.as_str()).await?;

        let votes: Vec<ApprovalStatus> =
            SubmissionRepository::approval_statuses(&mut tx, submission_id)
                .await?
                .iter()
                .filter_map(|s| ApprovalStatus::from_str(s))
                .collect();

        let quorum = evaluate_quorum(&votes);
        let submission = if quorum == ApprovalStatus::Approved
            && submission.team_approval_status() != Some(ApprovalStatus::Approved)
        {
            SubmissionRepository::set_team_approval_status(
                &mut tx,
                submission_id,
                ApprovalStatus::Approved.as_str(),
                true,
            )
            .await?
        } else {
            submission
        };

        tx.commit().await?;

        Ok(submission)
    }

    /// Supervisor records (or revises) feedback for a submission.
    ///
    /// Upsert semantics: at most one live supervisor-feedback row per
    /// submission; a second write replaces score, comments, and deadline.
    pub async fn record_supervisor_feedback(
        pool: &PgPool,
        mailer: Option<(&Mailer, &SmtpConfig)>,
        submission_id: &Uuid,
        supervisor_id: &Uuid,
        score: f64,
        comments: Option<&str>,
        resubmission_deadline: Option<DateTime<Utc>>,
    ) -> AppResult<SubmissionFeedback> {
        validation::validate_supervisor_score(score)
            .map_err(|e| AppError::InvalidArgument(e.to_string()))?;

        let submission = Self::get_submission(pool, submission_id).await?;

        let feedback = match FeedbackRepository::find_supervisor_row(pool, submission_id).await? {
            Some(existing) => {
                FeedbackRepository::update_supervisor(
                    pool,
                    &existing.id,
                    supervisor_id,
                    score,
                    comments,
                    resubmission_deadline,
                )
                .await?
            }
            None => {
                FeedbackRepository::insert_supervisor(
                    pool,
                    submission_id,
                    supervisor_id,
                    score,
                    comments,
                    resubmission_deadline,
                )
                .await?
            }
        };

        // Tell the leader; intent only, after the write committed
        if let Ok(team) = TeamService::get_team(pool, &submission.team_id).await {
            let title = format!("Feedback on {} ({})", team.name, submission.stage);
            let body = match comments {
                Some(comments) => format!(
                    "Your {} submission was scored {}/10.\n\n{}",
                    submission.stage, score, comments
                ),
                None => format!("Your {} submission was scored {}/10.", submission.stage, score),
            };
            NotificationService::notify(
                pool,
                mailer,
                &team.leader_id,
                NotificationKind::SupervisorFeedback,
                &title,
                &body,
            )
            .await;
        }

        Ok(feedback)
    }

    /// Admin records (or revises) the admin score for a submission.
    pub async fn record_admin_feedback(
        pool: &PgPool,
        submission_id: &Uuid,
        admin_id: &Uuid,
        score: f64,
        comments: Option<&str>,
    ) -> AppResult<SubmissionFeedback> {
        validation::validate_admin_score(score)
            .map_err(|e| AppError::InvalidArgument(e.to_string()))?;

        Self::get_submission(pool, submission_id).await?;

        match FeedbackRepository::find_admin_row(pool, submission_id).await? {
            Some(existing) => {
                FeedbackRepository::update_admin(pool, &existing.id, admin_id, score, comments)
                    .await
            }
            None => {
                FeedbackRepository::insert_admin(pool, submission_id, admin_id, score, comments)
                    .await
            }
        }
    }

    /// Feedback history for a submission
    pub async fn list_feedback(
        pool: &PgPool,
        submission_id: &Uuid,
    ) -> AppResult<Vec<SubmissionFeedback>> {
        Self::get_submission(pool, submission_id).await?;
        FeedbackRepository::list_for_submission(pool, submission_id).await
    }

    /// Team-approved submissions still awaiting supervisor review
    pub async fn list_awaiting_supervisor_review(pool: &PgPool) -> AppResult<Vec<Submission>> {
        SubmissionRepository::list_awaiting_supervisor_review(pool).await
    }

    /// Review count and average score given by a supervisor
    pub async fn supervisor_stats(pool: &PgPool, supervisor_id: &Uuid) -> AppResult<(i64, f64)> {
        FeedbackRepository::supervisor_stats(pool, supervisor_id).await
    }
}
