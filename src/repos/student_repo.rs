/*
 * Responsibility
 * - A student's record: student row + profile, event participations, activities
 */
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, FromRow)]
pub struct StudentRow {
    pub id: Uuid,
    pub enrollment_no: Option<String>,
    pub course: Option<String>,
    pub year: Option<i32>,
    pub gpa: Option<f64>,
    pub cgpa: Option<f64>,
    pub total_credits: Option<f64>,

    pub has_profile: bool,
    pub full_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct StudentParticipationRow {
    pub participant_id: Uuid,
    pub event_id: Uuid,
    pub role: Option<String>,
    pub approval_status: String,

    pub has_event: bool,
    pub event_name: Option<String>,
    pub event_start_date: Option<NaiveDate>,
    pub event_end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, FromRow)]
pub struct StudentActivityRow {
    pub activity_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub approval_status: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub credits_earned: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct StudentRecord {
    pub student: StudentRow,
    pub participations: Vec<StudentParticipationRow>,
    pub activities: Vec<StudentActivityRow>,
}

#[async_trait]
pub trait StudentRepo: Send + Sync {
    async fn find_record(&self, student_id: Uuid) -> RepoResult<Option<StudentRecord>>;
}

#[derive(Clone, Debug)]
pub struct PgStudentRepo {
    pool: PgPool,
}

impl PgStudentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepo for PgStudentRepo {
    async fn find_record(&self, student_id: Uuid) -> RepoResult<Option<StudentRecord>> {
        let student = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT
                s.id,
                s.enrollment_no,
                s.course,
                s.year::int4 AS year,
                s.gpa::float8 AS gpa,
                s.cgpa::float8 AS cgpa,
                s.total_credits::float8 AS total_credits,
                (p.id IS NOT NULL) AS has_profile,
                p.full_name,
                p.email
            FROM students s
            LEFT JOIN profiles p ON p.id = s.id
            WHERE s.id = $1
            "#,
        )
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(student) = student else {
            return Ok(None);
        };

        let participations = sqlx::query_as::<_, StudentParticipationRow>(
            r#"
            SELECT
                ep.participant_id,
                ep.event_id,
                ep.role,
                ep.approval_status,
                (e.event_id IS NOT NULL) AS has_event,
                e.name AS event_name,
                e.start_date AS event_start_date,
                e.end_date AS event_end_date
            FROM event_participants ep
            LEFT JOIN events e ON e.event_id = ep.event_id
            WHERE ep.student_id = $1
            ORDER BY e.start_date ASC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        let activities = sqlx::query_as::<_, StudentActivityRow>(
            r#"
            SELECT
                activity_id,
                title,
                description,
                approval_status,
                start_date,
                end_date,
                credits_earned::float8 AS credits_earned
            FROM activities
            WHERE student_id = $1
            ORDER BY start_date ASC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(StudentRecord {
            student,
            participations,
            activities,
        }))
    }
}
