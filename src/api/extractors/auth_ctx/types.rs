/*
 * Responsibility
 * - The "authenticated context" type handlers see
 * - The access middleware creates it, the role middleware fills in `role`
 */
use crate::services::authz::Role;
use crate::services::identity::Identity;

/// Present in the request extensions only after token verification succeeded.
///
/// - `identity` comes from the identity service, valid for this request only
/// - `role` is set once the route's AllowList check passed
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub identity: Identity,
    pub role: Option<Role>,
}

impl AuthCtx {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            role: None,
        }
    }
}
