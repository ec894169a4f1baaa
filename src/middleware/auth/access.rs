//! Bearer token verification → `AuthCtx` in request extensions.
//!
//! - `Authorization: Bearer <token>` is required. Without it the request is
//!   rejected before any upstream call.
//! - The token is resolved by the identity service on every request (no cache).
//! - Every failure answers the same 401; the cause only goes to the log.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::AuthCtx;
use crate::error::AppError;
use crate::state::AppState;

/// Puts token verification in front of every route currently in `router`.
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // route_layer: unknown paths stay 404 instead of turning into 401
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers()).ok_or(AppError::Unauthorized)?;

    let identity = match state.identity.resolve(token).await {
        Ok(identity) => identity,
        Err(err) => {
            tracing::warn!(
                error = %err,
                backend = state.identity.backend_name(),
                "access token verification failed"
            );
            return Err(AppError::Unauthorized);
        }
    };

    tracing::debug!(user_id = %identity.id, "access token verified");

    // middleware → extractor handoff
    req.extensions_mut().insert(AuthCtx::new(identity));

    Ok(next.run(req).await)
}

/// Token part of `Authorization: Bearer <token>`. The scheme is matched
/// case-insensitively; an empty token counts as absent.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")), Some("abc.def"));
        assert_eq!(bearer_token(&headers("bearer   abc")), Some("abc"));
    }

    #[test]
    fn rejects_missing_or_malformed_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers("Bearer")), None);
        assert_eq!(bearer_token(&headers("Bearer    ")), None);
        assert_eq!(bearer_token(&headers("Basic dXNlcjpwdw==")), None);
        assert_eq!(bearer_token(&headers("abc")), None);
    }
}
