/*
 * Responsibility
 * - URL structure of the service
 * - Which AllowList guards which route group (fixed at startup)
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::pipeline::protect;
use crate::services::authz::Role;
use crate::state::AppState;

use crate::api::handlers::{
    coordinator::{bulk_approve_participants, list_coordinated_events, list_event_participants},
    dashboard::{admin_panel, faculty_dashboard, student_dashboard},
    faculty::{get_faculty_details, get_my_faculty_profile, route_check},
    health::{health, hello},
    students::get_student_profile,
    verifications::{approve_activity, list_pending_verifications, reject_activity},
};

pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api", get(hello))
        .merge(dashboard_routes(state))
        .nest("/faculty", faculty_routes(state))
}

fn dashboard_routes(state: &AppState) -> Router<AppState> {
    let student = Router::new().route("/api/student-dashboard", get(student_dashboard));
    let faculty = Router::new().route("/api/faculty-dashboard", get(faculty_dashboard));
    let admin = Router::new().route("/api/admin-panel", get(admin_panel));

    Router::new()
        .merge(protect(student, state, &[Role::Student]))
        .merge(protect(faculty, state, &[Role::Faculty]))
        .merge(protect(admin, state, &[Role::Admin]))
}

fn faculty_routes(state: &AppState) -> Router<AppState> {
    let router = Router::new()
        .route("/me", get(get_faculty_details))
        .route("/my-profile", get(get_my_faculty_profile))
        .route("/test", get(route_check))
        .route("/coordinator/events", get(list_coordinated_events))
        .route("/coordinator/events/{eventId}", get(list_event_participants))
        .route(
            "/coordinator/events/{eventId}/verify",
            post(bulk_approve_participants),
        )
        .route("/students/{studentId}", get(get_student_profile))
        .route(
            "/activities/verifications/pending",
            get(list_pending_verifications),
        )
        .route(
            "/activities/verifications/{activityId}/approve",
            post(approve_activity),
        )
        .route(
            "/activities/verifications/{activityId}/reject",
            post(reject_activity),
        );

    protect(router, state, &[Role::Faculty])
}
