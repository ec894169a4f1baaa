/*
 * Responsibility
 * - events / event_participants queries for coordinators
 * - bulk approval is scoped to one event
 */
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::{approval::ApprovalStatus, error::RepoResult};

#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub event_id: Uuid,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct EventOwnerRow {
    pub coordinator_id: Option<Uuid>,
}

/// A participant joined with its student record and that student's profile.
/// Both joins are optional.
#[derive(Debug, Clone, FromRow)]
pub struct ParticipantRow {
    pub participant_id: Uuid,
    pub student_id: Uuid,
    pub role: Option<String>,
    pub approval_status: String,
    pub submitted_at: Option<DateTime<Utc>>,

    pub student_record_id: Option<Uuid>,
    pub enrollment_no: Option<String>,
    pub has_profile: bool,
    pub full_name: Option<String>,
}

#[async_trait]
pub trait EventRepo: Send + Sync {
    // Events coordinated by `coordinator_id`, earliest start first.
    async fn list_by_coordinator(&self, coordinator_id: Uuid) -> RepoResult<Vec<EventRow>>;

    async fn find_owner(&self, event_id: Uuid) -> RepoResult<Option<EventOwnerRow>>;

    // Earliest submission first.
    async fn list_participants(&self, event_id: Uuid) -> RepoResult<Vec<ParticipantRow>>;

    // Returns how many participants of `event_id` were updated.
    async fn approve_participants(&self, event_id: Uuid, participant_ids: &[Uuid])
    -> RepoResult<u64>;
}

#[derive(Clone, Debug)]
pub struct PgEventRepo {
    pool: PgPool,
}

impl PgEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepo for PgEventRepo {
    async fn list_by_coordinator(&self, coordinator_id: Uuid) -> RepoResult<Vec<EventRow>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT event_id, name, start_date, end_date, description
            FROM events
            WHERE coordinator_id = $1
            ORDER BY start_date ASC
            "#,
        )
        .bind(coordinator_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_owner(&self, event_id: Uuid) -> RepoResult<Option<EventOwnerRow>> {
        let row = sqlx::query_as::<_, EventOwnerRow>(
            r#"
            SELECT coordinator_id
            FROM events
            WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list_participants(&self, event_id: Uuid) -> RepoResult<Vec<ParticipantRow>> {
        let rows = sqlx::query_as::<_, ParticipantRow>(
            r#"
            SELECT
                ep.participant_id,
                ep.student_id,
                ep.role,
                ep.approval_status,
                ep.submitted_at,
                s.id AS student_record_id,
                s.enrollment_no,
                (p.id IS NOT NULL) AS has_profile,
                p.full_name
            FROM event_participants ep
            LEFT JOIN students s ON s.id = ep.student_id
            LEFT JOIN profiles p ON p.id = s.id
            WHERE ep.event_id = $1
            ORDER BY ep.submitted_at ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn approve_participants(
        &self,
        event_id: Uuid,
        participant_ids: &[Uuid],
    ) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE event_participants
            SET approval_status = $3
            WHERE event_id = $1
              AND participant_id = ANY($2)
            "#,
        )
        .bind(event_id)
        .bind(participant_ids)
        .bind(ApprovalStatus::Approved.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
