/*
 * Responsibility
 * - Student profile DTO as seen by faculty
 */
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::repos::student_repo::{StudentActivityRow, StudentParticipationRow, StudentRecord};

#[derive(Debug, Serialize)]
pub struct StudentContact {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ParticipationEvent {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct StudentParticipationResponse {
    pub participant_id: Uuid,
    pub event_id: Uuid,
    pub role: Option<String>,
    pub approval_status: String,
    pub events: Option<ParticipationEvent>,
}

impl From<StudentParticipationRow> for StudentParticipationResponse {
    fn from(row: StudentParticipationRow) -> Self {
        let events = row.has_event.then(|| ParticipationEvent {
            name: row.event_name,
            start_date: row.event_start_date,
            end_date: row.event_end_date,
        });
        Self {
            participant_id: row.participant_id,
            event_id: row.event_id,
            role: row.role,
            approval_status: row.approval_status,
            events,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StudentActivityResponse {
    pub activity_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub approval_status: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub credits_earned: Option<f64>,
}

impl From<StudentActivityRow> for StudentActivityResponse {
    fn from(row: StudentActivityRow) -> Self {
        Self {
            activity_id: row.activity_id,
            title: row.title,
            description: row.description,
            approval_status: row.approval_status,
            start_date: row.start_date,
            end_date: row.end_date,
            credits_earned: row.credits_earned,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StudentProfileResponse {
    pub id: Uuid,
    pub enrollment_no: Option<String>,
    pub course: Option<String>,
    pub year: Option<i32>,
    pub gpa: Option<f64>,
    pub cgpa: Option<f64>,
    pub total_credits: Option<f64>,
    pub profiles: Option<StudentContact>,
    pub event_participants: Vec<StudentParticipationResponse>,
    pub activities: Vec<StudentActivityResponse>,
}

impl From<StudentRecord> for StudentProfileResponse {
    fn from(record: StudentRecord) -> Self {
        let StudentRecord {
            student,
            participations,
            activities,
        } = record;

        let profiles = student.has_profile.then(|| StudentContact {
            full_name: student.full_name,
            email: student.email,
        });

        Self {
            id: student.id,
            enrollment_no: student.enrollment_no,
            course: student.course,
            year: student.year,
            gpa: student.gpa,
            cgpa: student.cgpa,
            total_credits: student.total_credits,
            profiles,
            event_participants: participations
                .into_iter()
                .map(StudentParticipationResponse::from)
                .collect(),
            activities: activities
                .into_iter()
                .map(StudentActivityResponse::from)
                .collect(),
        }
    }
}
