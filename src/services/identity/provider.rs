//! Identity resolution interface used by the token-verification middleware.
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

/// A user as reported by the identity service.
///
/// Only lives for one request: the middleware stores it in the request
/// extensions and it is dropped with the request.
#[derive(Debug, Clone, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Identity {
    /// Name used in greetings: email, then phone, then the user id.
    pub fn display_name(&self) -> String {
        [self.email.as_deref(), self.phone.as_deref()]
            .into_iter()
            .flatten()
            .find(|v| !v.trim().is_empty())
            .map_or_else(|| self.id.to_string(), str::to_string)
    }
}

/// Identity-layer errors.
///
/// Kept independent from `AppError`: the middleware decides that every
/// variant becomes the same 401, the variants only matter for logs.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("token rejected by identity service (status {0})")]
    Rejected(u16),
    #[error("identity service transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed identity response: {0}")]
    Malformed(String),
    #[error("invalid identity endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Resolves a bearer token to an [`Identity`].
///
/// Implementations make exactly one upstream call per invocation and never
/// cache results.
#[async_trait]
pub trait IdentityProvider: Send + Sync + 'static {
    // Backend name for logs.
    fn backend_name(&self) -> &'static str;

    async fn resolve(&self, token: &str) -> Result<Identity, IdentityError>;
}
