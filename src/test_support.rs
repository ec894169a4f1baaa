//! Fakes for the identity service and the data store, plus HTTP helpers.
//!
//! `InMemoryStore` implements every repository trait over one shared dataset and
//! counts role lookups and mutations so tests can assert that a request was
//! stopped before touching the store.
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::{NaiveDate, Utc};
use serde_json::Value;
use tower::ServiceExt;
use url::Url;
use uuid::Uuid;

use crate::config::{AppEnv, Config};
use crate::repos::{
    ActivityRepo, EventRepo, ProfileRepo, StudentRepo,
    activity_repo::{ActivityRow, PendingActivity, ProofRow, attach_proofs},
    error::{RepoError, RepoResult},
    event_repo::{EventOwnerRow, EventRow, ParticipantRow},
    profile_repo::{AchievementRow, FacultyProfileRow},
    student_repo::{StudentRecord, StudentRow},
};
use crate::services::identity::provider::{Identity, IdentityError, IdentityProvider};
use crate::state::AppState;

// --- identity ---

#[derive(Clone, Default)]
pub struct FakeIdentityProvider {
    tokens: Arc<Mutex<HashMap<String, Identity>>>,
    calls: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl FakeIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&self, token: &str, user_id: Uuid, email: &str) {
        self.tokens.lock().unwrap().insert(
            token.to_string(),
            Identity {
                id: user_id,
                email: Some(email.to_string()),
                phone: None,
            },
        );
    }

    // Every call fails as if the identity service were down.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    fn backend_name(&self) -> &'static str {
        "fake"
    }

    async fn resolve(&self, token: &str) -> Result<Identity, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(IdentityError::Rejected(503));
        }
        self.tokens
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(IdentityError::Rejected(401))
    }
}

// --- data store ---

#[derive(Clone)]
struct StoredProfile {
    role: Option<String>,
    full_name: Option<String>,
    email: Option<String>,
    faculty: Option<(Option<String>, Option<String>)>,
}

#[derive(Clone)]
struct StoredEvent {
    coordinator_id: Option<Uuid>,
    row: EventRow,
}

#[derive(Clone)]
struct StoredParticipant {
    event_id: Uuid,
    row: ParticipantRow,
}

#[derive(Clone)]
struct StoredActivity {
    row: ActivityRow,
    feedback: Option<String>,
}

#[derive(Default)]
struct Data {
    profiles: HashMap<Uuid, StoredProfile>,
    achievements: Vec<(Uuid, AchievementRow)>,
    events: Vec<StoredEvent>,
    participants: Vec<StoredParticipant>,
    activities: Vec<StoredActivity>,
    proofs: Vec<ProofRow>,
    students: HashMap<Uuid, StudentRecord>,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    data: Arc<Mutex<Data>>,
    role_lookups: Arc<AtomicUsize>,
    mutations: Arc<AtomicUsize>,
    fail_roles: Arc<AtomicBool>,
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, identity: FakeIdentityProvider) -> AppState {
        AppState::new(
            Arc::new(identity),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
        )
    }

    pub fn add_profile(&self, role: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.data.lock().unwrap().profiles.insert(
            id,
            StoredProfile {
                role: Some(role.to_string()),
                full_name: None,
                email: None,
                faculty: None,
            },
        );
        id
    }

    pub fn add_faculty(&self, full_name: &str, email: &str, department: Option<&str>) -> Uuid {
        let id = Uuid::new_v4();
        self.data.lock().unwrap().profiles.insert(
            id,
            StoredProfile {
                role: Some("faculty".into()),
                full_name: Some(full_name.into()),
                email: Some(email.into()),
                faculty: department.map(|d| (Some(d.to_string()), Some("Professor".to_string()))),
            },
        );
        id
    }

    pub fn add_achievement(&self, faculty_id: Uuid, text: &str, age_days: i64) -> Uuid {
        let id = Uuid::new_v4();
        self.data.lock().unwrap().achievements.push((
            faculty_id,
            AchievementRow {
                faculty_achievement_id: id,
                achievements: Some(text.into()),
                updated_at: Some(Utc::now() - chrono::Duration::days(age_days)),
            },
        ));
        id
    }

    pub fn add_event(&self, coordinator_id: Uuid, name: &str, start: NaiveDate) -> Uuid {
        let event_id = Uuid::new_v4();
        self.data.lock().unwrap().events.push(StoredEvent {
            coordinator_id: Some(coordinator_id),
            row: EventRow {
                event_id,
                name: name.into(),
                start_date: Some(start),
                end_date: None,
                description: None,
            },
        });
        event_id
    }

    pub fn add_participant(&self, event_id: Uuid, enrollment_no: Option<&str>) -> Uuid {
        let participant_id = Uuid::new_v4();
        let student_id = Uuid::new_v4();
        self.data.lock().unwrap().participants.push(StoredParticipant {
            event_id,
            row: ParticipantRow {
                participant_id,
                student_id,
                role: Some("participant".into()),
                approval_status: "PENDING".into(),
                submitted_at: Some(Utc::now()),
                student_record_id: enrollment_no.map(|_| student_id),
                enrollment_no: enrollment_no.map(str::to_string),
                has_profile: enrollment_no.is_some(),
                full_name: enrollment_no.map(|_| "Student Name".to_string()),
            },
        });
        participant_id
    }

    pub fn add_activity(&self, verifier_id: Uuid, status: &str, start: NaiveDate) -> Uuid {
        let activity_id = Uuid::new_v4();
        self.data.lock().unwrap().activities.push(StoredActivity {
            row: ActivityRow {
                activity_id,
                student_id: Uuid::new_v4(),
                category_id: None,
                title: format!("activity starting {start}"),
                description: None,
                approval_status: status.into(),
                start_date: Some(start),
                end_date: None,
                credits_earned: Some(1.5),
                verifier_id: Some(verifier_id),
            },
            feedback: None,
        });
        activity_id
    }

    pub fn add_proof(&self, activity_id: Uuid, file_url: &str) {
        self.data.lock().unwrap().proofs.push(ProofRow {
            proof_id: Uuid::new_v4(),
            activity_id,
            file_url: file_url.into(),
            file_type: Some("image/png".into()),
            file_size: Some(2048),
            uploaded_at: Some(Utc::now()),
        });
    }

    pub fn add_student(&self, enrollment_no: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.data.lock().unwrap().students.insert(
            id,
            StudentRecord {
                student: StudentRow {
                    id,
                    enrollment_no: Some(enrollment_no.into()),
                    course: Some("B.Tech CSE".into()),
                    year: Some(3),
                    gpa: Some(8.4),
                    cgpa: Some(8.1),
                    total_credits: Some(12.0),
                    has_profile: false,
                    full_name: None,
                    email: None,
                },
                participations: Vec::new(),
                activities: Vec::new(),
            },
        );
        id
    }

    pub fn activity_state(&self, activity_id: Uuid) -> Option<(String, Option<String>)> {
        self.data
            .lock()
            .unwrap()
            .activities
            .iter()
            .find(|a| a.row.activity_id == activity_id)
            .map(|a| (a.row.approval_status.clone(), a.feedback.clone()))
    }

    pub fn participant_status(&self, participant_id: Uuid) -> Option<String> {
        self.data
            .lock()
            .unwrap()
            .participants
            .iter()
            .find(|p| p.row.participant_id == participant_id)
            .map(|p| p.row.approval_status.clone())
    }

    pub fn fail_role_lookups(&self) {
        self.fail_roles.store(true, Ordering::SeqCst);
    }

    pub fn role_lookups(&self) -> usize {
        self.role_lookups.load(Ordering::SeqCst)
    }

    pub fn mutations(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileRepo for InMemoryStore {
    async fn find_role(&self, user_id: Uuid) -> RepoResult<Option<String>> {
        self.role_lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_roles.load(Ordering::SeqCst) {
            return Err(RepoError::Db(sqlx::Error::PoolTimedOut));
        }
        let data = self.data.lock().unwrap();
        Ok(data.profiles.get(&user_id).and_then(|p| p.role.clone()))
    }

    async fn find_faculty_profile(&self, user_id: Uuid) -> RepoResult<Option<FacultyProfileRow>> {
        let data = self.data.lock().unwrap();
        Ok(data.profiles.get(&user_id).map(|p| FacultyProfileRow {
            id: user_id,
            full_name: p.full_name.clone(),
            email: p.email.clone(),
            role: p.role.clone(),
            has_faculty: p.faculty.is_some(),
            department: p.faculty.as_ref().and_then(|f| f.0.clone()),
            designation: p.faculty.as_ref().and_then(|f| f.1.clone()),
        }))
    }

    async fn list_achievements(&self, faculty_id: Uuid) -> RepoResult<Vec<AchievementRow>> {
        let data = self.data.lock().unwrap();
        let mut rows: Vec<AchievementRow> = data
            .achievements
            .iter()
            .filter(|(owner, _)| *owner == faculty_id)
            .map(|(_, row)| row.clone())
            .collect();
        rows.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(rows)
    }
}

#[async_trait]
impl EventRepo for InMemoryStore {
    async fn list_by_coordinator(&self, coordinator_id: Uuid) -> RepoResult<Vec<EventRow>> {
        let data = self.data.lock().unwrap();
        let mut rows: Vec<EventRow> = data
            .events
            .iter()
            .filter(|e| e.coordinator_id == Some(coordinator_id))
            .map(|e| e.row.clone())
            .collect();
        rows.sort_by_key(|e| e.start_date);
        Ok(rows)
    }

    async fn find_owner(&self, event_id: Uuid) -> RepoResult<Option<EventOwnerRow>> {
        let data = self.data.lock().unwrap();
        Ok(data
            .events
            .iter()
            .find(|e| e.row.event_id == event_id)
            .map(|e| EventOwnerRow {
                coordinator_id: e.coordinator_id,
            }))
    }

    async fn list_participants(&self, event_id: Uuid) -> RepoResult<Vec<ParticipantRow>> {
        let data = self.data.lock().unwrap();
        let mut rows: Vec<ParticipantRow> = data
            .participants
            .iter()
            .filter(|p| p.event_id == event_id)
            .map(|p| p.row.clone())
            .collect();
        rows.sort_by_key(|p| p.submitted_at);
        Ok(rows)
    }

    async fn approve_participants(
        &self,
        event_id: Uuid,
        participant_ids: &[Uuid],
    ) -> RepoResult<u64> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        let mut data = self.data.lock().unwrap();
        let mut updated = 0;
        for p in data.participants.iter_mut() {
            if p.event_id == event_id && participant_ids.contains(&p.row.participant_id) {
                p.row.approval_status = "APPROVED".into();
                updated += 1;
            }
        }
        Ok(updated)
    }
}

#[async_trait]
impl ActivityRepo for InMemoryStore {
    async fn list_pending_for_verifier(
        &self,
        verifier_id: Uuid,
    ) -> RepoResult<Vec<PendingActivity>> {
        let data = self.data.lock().unwrap();
        let mut rows: Vec<ActivityRow> = data
            .activities
            .iter()
            .filter(|a| a.row.approval_status == "PENDING" && a.row.verifier_id == Some(verifier_id))
            .map(|a| a.row.clone())
            .collect();
        rows.sort_by_key(|a| a.start_date);
        Ok(attach_proofs(rows, data.proofs.clone()))
    }

    async fn approve(&self, activity_id: Uuid) -> RepoResult<bool> {
        let mut data = self.data.lock().unwrap();
        let Some(activity) = data
            .activities
            .iter_mut()
            .find(|a| a.row.activity_id == activity_id)
        else {
            return Ok(false);
        };
        self.mutations.fetch_add(1, Ordering::SeqCst);
        activity.row.approval_status = "APPROVED".into();
        Ok(true)
    }

    async fn reject(&self, activity_id: Uuid, feedback: &str) -> RepoResult<bool> {
        let mut data = self.data.lock().unwrap();
        let Some(activity) = data
            .activities
            .iter_mut()
            .find(|a| a.row.activity_id == activity_id)
        else {
            return Ok(false);
        };
        self.mutations.fetch_add(1, Ordering::SeqCst);
        activity.row.approval_status = "REJECTED".into();
        activity.feedback = Some(feedback.to_string());
        Ok(true)
    }
}

#[async_trait]
impl StudentRepo for InMemoryStore {
    async fn find_record(&self, student_id: Uuid) -> RepoResult<Option<StudentRecord>> {
        Ok(self.data.lock().unwrap().students.get(&student_id).cloned())
    }
}

// --- http ---

pub fn test_config() -> Config {
    Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        app_env: AppEnv::Development,
        database_url: "postgres://unused".into(),
        database_max_connections: 1,
        supabase_url: Url::parse("http://localhost:54321").unwrap(),
        supabase_api_key: "test-key".into(),
        upstream_timeout: Duration::from_secs(1),
        request_timeout: Duration::from_secs(5),
        cors_allowed_origins: Vec::new(),
    }
}

/// Sends one request through `app`; returns the status and the JSON body
/// (`Value::Null` when the body is empty).
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let res = app.oneshot(request).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
