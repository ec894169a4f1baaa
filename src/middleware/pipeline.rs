/*
 * Responsibility
 * - Compose the protected-route pipeline: access (token) → role (AllowList) → handler
 * - Each stage either continues or answers with an AppError; nothing re-enters an earlier stage
 */
use axum::Router;

use crate::middleware::auth::{access, role};
use crate::services::authz::{AllowList, Role};
use crate::state::AppState;

/// Protects every route in `router` with token verification followed by the
/// role check for `roles`.
pub fn protect(router: Router<AppState>, state: &AppState, roles: &[Role]) -> Router<AppState> {
    // The layer added last runs first.
    let router = role::apply(router, state.clone(), AllowList::new(roles));
    access::apply(router, state.clone())
}
