/*
 * Responsibility
 * - Verification queue DTOs
 * - Reject request validation (feedback required)
 */
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::activity_repo::{PendingActivity, ProofRow};

#[derive(Debug, Serialize)]
pub struct ProofResponse {
    pub proof_id: Uuid,
    pub file_url: String,
    pub file_type: Option<String>,
    pub file_size: Option<i64>,
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl From<ProofRow> for ProofResponse {
    fn from(row: ProofRow) -> Self {
        Self {
            proof_id: row.proof_id,
            file_url: row.file_url,
            file_type: row.file_type,
            file_size: row.file_size,
            uploaded_at: row.uploaded_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PendingActivityResponse {
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
    pub activity_proofs: Vec<ProofResponse>,
}

impl From<PendingActivity> for PendingActivityResponse {
    fn from(PendingActivity { activity, proofs }: PendingActivity) -> Self {
        Self {
            activity_id: activity.activity_id,
            student_id: activity.student_id,
            category_id: activity.category_id,
            title: activity.title,
            description: activity.description,
            approval_status: activity.approval_status,
            start_date: activity.start_date,
            end_date: activity.end_date,
            credits_earned: activity.credits_earned,
            verifier_id: activity.verifier_id,
            activity_proofs: proofs.into_iter().map(ProofResponse::from).collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RejectActivityRequest {
    #[serde(default)]
    pub feedback: Option<String>,
}

impl RejectActivityRequest {
    /// Trimmed feedback, required and non-blank.
    pub fn validate(&self) -> Result<&str, &'static str> {
        match self.feedback.as_deref().map(str::trim) {
            Some(feedback) if !feedback.is_empty() => Ok(feedback),
            _ => Err("Feedback is required to reject"),
        }
    }
}
