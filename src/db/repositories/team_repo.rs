//! Team repository

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Team, TeamInvitation, User},
};

/// Repository for team, membership, and invitation database operations
pub struct TeamRepository;

impl TeamRepository {
    /// Create a team with the leader as its first roster member
    pub async fn create(
        pool: &PgPool,
        project_id: &Uuid,
        leader_id: &Uuid,
        name: &str,
    ) -> AppResult<Team> {
        let mut tx = pool.begin().await?;

        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (project_id, leader_id, name)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(project_id)
        .bind(leader_id)
        .bind(name)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(r#"INSERT INTO team_members (team_id, user_id) VALUES ($1, $2)"#)
            .bind(team.id)
            .bind(leader_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(team)
    }

    /// Find team by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(r#"SELECT * FROM teams WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(team)
    }

    /// Find team by ID inside a transaction, locking the row for update
    pub async fn find_by_id_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: &Uuid,
    ) -> AppResult<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(r#"SELECT * FROM teams WHERE id = $1 FOR UPDATE"#)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(team)
    }

    /// Find the team a user leads or belongs to within a project
    pub async fn find_by_project_and_member(
        pool: &PgPool,
        project_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            SELECT t.* FROM teams t
            JOIN team_members tm ON tm.team_id = t.id
            WHERE t.project_id = $1 AND tm.user_id = $2
            "#,
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(team)
    }

    /// List teams for a project
    pub async fn list_by_project(pool: &PgPool, project_id: &Uuid) -> AppResult<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"SELECT * FROM teams WHERE project_id = $1 ORDER BY created_at"#,
        )
        .bind(project_id)
        .fetch_all(pool)
        .await?;

        Ok(teams)
    }

    /// List roster members for a team
    pub async fn list_members(pool: &PgPool, team_id: &Uuid) -> AppResult<Vec<User>> {
        let members = sqlx::query_as::<_, User>(
            r#"
            SELECT u.* FROM users u
            JOIN team_members tm ON tm.user_id = u.id
            WHERE tm.team_id = $1
            ORDER BY tm.joined_at
            "#,
        )
        .bind(team_id)
        .fetch_all(pool)
        .await?;

        Ok(members)
    }

    /// Add a member to the roster; joining twice is a no-op
    pub async fn add_member(
        tx: &mut Transaction<'_, Postgres>,
        team_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO team_members (team_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (team_id, user_id) DO NOTHING
            "#,
        )
        .bind(team_id)
        .bind(user_id)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    /// Count roster members inside a transaction
    pub async fn member_count(tx: &mut Transaction<'_, Postgres>, team_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM team_members WHERE team_id = $1"#)
                .bind(team_id)
                .fetch_one(&mut **tx)
                .await?;

        Ok(count)
    }

    /// Set team lifecycle status
    pub async fn set_status(pool: &PgPool, id: &Uuid, status: &str) -> AppResult<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok(team)
    }

    /// Set team lifecycle status inside a transaction
    pub async fn set_status_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: &Uuid,
        status: &str,
    ) -> AppResult<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(&mut **tx)
        .await?;

        Ok(team)
    }

    /// Create an invitation
    pub async fn create_invitation(
        pool: &PgPool,
        team_id: &Uuid,
        invitee_email: &str,
    ) -> AppResult<TeamInvitation> {
        let invitation = sqlx::query_as::<_, TeamInvitation>(
            r#"
            INSERT INTO team_invitations (team_id, invitee_email)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(team_id)
        .bind(invitee_email)
        .fetch_one(pool)
        .await?;

        Ok(invitation)
    }

    /// Find invitation by ID inside a transaction
    pub async fn find_invitation(
        tx: &mut Transaction<'_, Postgres>,
        id: &Uuid,
    ) -> AppResult<Option<TeamInvitation>> {
        let invitation =
            sqlx::query_as::<_, TeamInvitation>(r#"SELECT * FROM team_invitations WHERE id = $1"#)
                .bind(id)
                .fetch_optional(&mut **tx)
                .await?;

        Ok(invitation)
    }

    /// Find a pending invitation for a (team, email) pair
    pub async fn find_pending_invitation(
        pool: &PgPool,
        team_id: &Uuid,
        invitee_email: &str,
    ) -> AppResult<Option<TeamInvitation>> {
        let invitation = sqlx::query_as::<_, TeamInvitation>(
            r#"
            SELECT * FROM team_invitations
            WHERE team_id = $1 AND invitee_email = $2 AND status = 'pending'
            "#,
        )
        .bind(team_id)
        .bind(invitee_email)
        .fetch_optional(pool)
        .await?;

        Ok(invitation)
    }

    /// List all invitations for a team
    pub async fn list_invitations(pool: &PgPool, team_id: &Uuid) -> AppResult<Vec<TeamInvitation>> {
        let invitations = sqlx::query_as::<_, TeamInvitation>(
            r#"SELECT * FROM team_invitations WHERE team_id = $1 ORDER BY invited_at"#,
        )
        .bind(team_id)
        .fetch_all(pool)
        .await?;

        Ok(invitations)
    }

    /// List invitation statuses for a team inside a transaction
    pub async fn invitation_statuses(
        tx: &mut Transaction<'_, Postgres>,
        team_id: &Uuid,
    ) -> AppResult<Vec<String>> {
        let statuses: Vec<String> =
            sqlx::query_scalar(r#"SELECT status FROM team_invitations WHERE team_id = $1"#)
                .bind(team_id)
                .fetch_all(&mut **tx)
                .await?;

        Ok(statuses)
    }

    /// Record an invitation response
    pub async fn set_invitation_status(
        tx: &mut Transaction<'_, Postgres>,
        id: &Uuid,
        status: &str,
    ) -> AppResult<TeamInvitation> {
        let invitation = sqlx::query_as::<_, TeamInvitation>(
            r#"
            UPDATE team_invitations
            SET status = $2, responded_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(&mut **tx)
        .await?;

        Ok(invitation)
    }
}
