use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::services::identity::provider::{Identity, IdentityError, IdentityProvider};

/// Supabase Auth (GoTrue) backed identity provider.
///
/// `GET {base}/auth/v1/user` with the project key in `apikey` and the caller's
/// token as bearer. Any non-2xx answer is a rejection.
#[derive(Clone)]
pub struct SupabaseIdentityProvider {
    http: reqwest::Client,
    user_endpoint: Url,
    api_key: String,
}

impl std::fmt::Debug for SupabaseIdentityProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print the project key
        f.debug_struct("SupabaseIdentityProvider")
            .field("user_endpoint", &self.user_endpoint.as_str())
            .finish()
    }
}

impl SupabaseIdentityProvider {
    pub fn new(
        base_url: &Url,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            user_endpoint: user_endpoint(base_url)?,
            api_key: api_key.into(),
        })
    }
}

// `Url::join` replaces the last path segment unless the base ends with '/'.
fn user_endpoint(base_url: &Url) -> Result<Url, url::ParseError> {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("auth/v1/user")
}

#[async_trait]
impl IdentityProvider for SupabaseIdentityProvider {
    fn backend_name(&self) -> &'static str {
        "supabase"
    }

    async fn resolve(&self, token: &str) -> Result<Identity, IdentityError> {
        let res = self
            .http
            .get(self.user_endpoint.clone())
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(IdentityError::Rejected(status.as_u16()));
        }

        res.json::<Identity>()
            .await
            .map_err(|e| IdentityError::Malformed(e.to_string()))
    }
}
