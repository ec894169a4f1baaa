/*
 * Responsibility
 * - Coordinator event / participant DTOs
 * - Bulk approval request validation
 */
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::repos::event_repo::{EventRow, ParticipantRow};

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub event_id: Uuid,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl From<EventRow> for EventResponse {
    fn from(row: EventRow) -> Self {
        Self {
            event_id: row.event_id,
            name: row.name,
            start_date: row.start_date,
            end_date: row.end_date,
            description: row.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ParticipantProfile {
    pub full_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ParticipantStudent {
    pub id: Uuid,
    pub enrollment_no: Option<String>,
    pub profiles: Option<ParticipantProfile>,
}

#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    pub participant_id: Uuid,
    pub student_id: Uuid,
    pub role: Option<String>,
    pub approval_status: String,
    pub submitted_at: Option<DateTime<Utc>>,
    pub students: Option<ParticipantStudent>,
}

impl From<ParticipantRow> for ParticipantResponse {
    fn from(row: ParticipantRow) -> Self {
        let profiles = row.has_profile.then(|| ParticipantProfile {
            full_name: row.full_name,
        });
        let students = row.student_record_id.map(|id| ParticipantStudent {
            id,
            enrollment_no: row.enrollment_no,
            profiles,
        });

        Self {
            participant_id: row.participant_id,
            student_id: row.student_id,
            role: row.role,
            approval_status: row.approval_status,
            submitted_at: row.submitted_at,
            students,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BulkApproveRequest {
    // Kept untyped so a non-array value gets its own message instead of a generic body error.
    #[serde(rename = "participantIds", default)]
    pub participant_ids: Option<Value>,
}

impl BulkApproveRequest {
    pub fn validate(&self) -> Result<Vec<Uuid>, &'static str> {
        let Some(Value::Array(items)) = &self.participant_ids else {
            return Err("participantIds must be an array");
        };

        items
            .iter()
            .map(|item| {
                item.as_str()
                    .and_then(|s| Uuid::parse_str(s.trim()).ok())
                    .ok_or("participantIds must contain participant ids")
            })
            .collect()
    }
}
