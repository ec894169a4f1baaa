//! Role authorization: profile role lookup checked against the route's AllowList.
//!
//! Runs after `access`, so an `AuthCtx` is already in the extensions.
//! - lookup infrastructure failure → 500
//! - no profile, no role, unknown role, role not allowed → 403

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};
use uuid::Uuid;

use crate::api::extractors::AuthCtx;
use crate::error::AppError;
use crate::repos::ProfileRepo;
use crate::services::authz::{AllowList, Role};
use crate::state::AppState;

#[derive(Clone)]
struct RoleGate {
    state: AppState,
    allow: AllowList,
}

/// Requires one of `allow` on every route currently in `router`.
pub fn apply(router: Router<AppState>, state: AppState, allow: AllowList) -> Router<AppState> {
    let gate = RoleGate { state, allow };
    router.route_layer(middleware::from_fn_with_state(gate, role_middleware))
}

async fn role_middleware(
    State(gate): State<RoleGate>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(user_id) = req.extensions().get::<AuthCtx>().map(|ctx| ctx.identity.id) else {
        tracing::error!("role check reached without an authenticated identity");
        return Err(AppError::Unauthorized);
    };

    let role = authorize(gate.state.profiles.as_ref(), user_id, &gate.allow).await?;

    if let Some(ctx) = req.extensions_mut().get_mut::<AuthCtx>() {
        ctx.role = Some(role);
    }

    Ok(next.run(req).await)
}

pub async fn authorize(
    profiles: &dyn ProfileRepo,
    user_id: Uuid,
    allow: &AllowList,
) -> Result<Role, AppError> {
    let raw = match profiles.find_role(user_id).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::warn!(%user_id, "no profile role found");
            return Err(AppError::Forbidden);
        }
        Err(err) => {
            tracing::error!(%user_id, error = ?err, "role lookup failed");
            return Err(AppError::Internal);
        }
    };

    let role = raw.parse::<Role>().map_err(|err| {
        tracing::warn!(%user_id, error = %err, "profile has unrecognised role");
        AppError::Forbidden
    })?;

    if !allow.permits(role) {
        tracing::info!(%user_id, %role, allowed = ?allow.roles(), "role not permitted");
        return Err(AppError::Forbidden);
    }

    Ok(role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryStore;

    #[tokio::test]
    async fn allowed_role_is_returned() {
        let store = InMemoryStore::new();
        let user = store.add_profile("coordinator");

        let role = authorize(&store, user, &AllowList::new(&[Role::Faculty]))
            .await
            .unwrap();
        assert_eq!(role, Role::Faculty);
    }

    #[tokio::test]
    async fn disallowed_role_is_forbidden() {
        let store = InMemoryStore::new();
        let user = store.add_profile("student");

        let err = authorize(&store, user, &AllowList::new(&[Role::Faculty, Role::Admin]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[tokio::test]
    async fn missing_profile_is_forbidden() {
        let store = InMemoryStore::new();

        let err = authorize(&store, Uuid::new_v4(), &AllowList::new(&[Role::Student]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[tokio::test]
    async fn unknown_role_is_forbidden() {
        let store = InMemoryStore::new();
        let user = store.add_profile("alumni");

        let err = authorize(&store, user, &AllowList::new(&[Role::Student]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[tokio::test]
    async fn lookup_failure_is_internal() {
        let store = InMemoryStore::new();
        let user = store.add_profile("faculty");
        store.fail_role_lookups();

        let err = authorize(&store, user, &AllowList::new(&[Role::Faculty]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal));
    }
}
