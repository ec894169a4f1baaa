/*
 * Responsibility
 * - activities awaiting verification (+ their proofs)
 * - approve / reject status transitions
 */
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::{approval::ApprovalStatus, error::RepoResult};

#[derive(Debug, Clone, FromRow)]
pub struct ActivityRow {
    pub activity_id: Uuid,
    pub student_id: Uuid,
    pub category_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub approval_status: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub credits_earned: Option<f64>,
    pub verifier_id: Option<Uuid>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ProofRow {
    pub proof_id: Uuid,
    pub activity_id: Uuid,
    pub file_url: String,
    pub file_type: Option<String>,
    pub file_size: Option<i64>,
    pub uploaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct PendingActivity {
    pub activity: ActivityRow,
    pub proofs: Vec<ProofRow>,
}

#[async_trait]
pub trait ActivityRepo: Send + Sync {
    // PENDING activities assigned to `verifier_id`, earliest start first.
    async fn list_pending_for_verifier(&self, verifier_id: Uuid)
    -> RepoResult<Vec<PendingActivity>>;

    // `false` when no activity has this id. Repeating the call is harmless.
    async fn approve(&self, activity_id: Uuid) -> RepoResult<bool>;

    async fn reject(&self, activity_id: Uuid, feedback: &str) -> RepoResult<bool>;
}

/// Groups proofs under their activity, keeping the activity order and the
/// proof order as given.
pub fn attach_proofs(activities: Vec<ActivityRow>, proofs: Vec<ProofRow>) -> Vec<PendingActivity> {
    let mut by_activity: HashMap<Uuid, Vec<ProofRow>> = HashMap::new();
    for proof in proofs {
        by_activity.entry(proof.activity_id).or_default().push(proof);
    }

    activities
        .into_iter()
        .map(|activity| {
            let proofs = by_activity.remove(&activity.activity_id).unwrap_or_default();
            PendingActivity { activity, proofs }
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct PgActivityRepo {
    pool: PgPool,
}

impl PgActivityRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepo for PgActivityRepo {
    async fn list_pending_for_verifier(
        &self,
        verifier_id: Uuid,
    ) -> RepoResult<Vec<PendingActivity>> {
        let activities = sqlx::query_as::<_, ActivityRow>(
            r#"
            SELECT
                activity_id,
                student_id,
                category_id,
                title,
                description,
                approval_status,
                start_date,
                end_date,
                credits_earned::float8 AS credits_earned,
                verifier_id
            FROM activities
            WHERE approval_status = $1
              AND verifier_id = $2
            ORDER BY start_date ASC
            "#,
        )
        .bind(ApprovalStatus::Pending.as_str())
        .bind(verifier_id)
        .fetch_all(&self.pool)
        .await?;

        if activities.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = activities.iter().map(|a| a.activity_id).collect();
        let proofs = sqlx::query_as::<_, ProofRow>(
            r#"
            SELECT proof_id, activity_id, file_url, file_type, file_size, uploaded_at
            FROM activity_proofs
            WHERE activity_id = ANY($1)
            ORDER BY uploaded_at ASC
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(attach_proofs(activities, proofs))
    }

    async fn approve(&self, activity_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE activities
            SET approval_status = $2
            WHERE activity_id = $1
            "#,
        )
        .bind(activity_id)
        .bind(ApprovalStatus::Approved.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn reject(&self, activity_id: Uuid, feedback: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE activities
            SET approval_status = $2,
                feedback = $3
            WHERE activity_id = $1
            "#,
        )
        .bind(activity_id)
        .bind(ApprovalStatus::Rejected.as_str())
        .bind(feedback)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
