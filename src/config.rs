/*
 * Responsibility
 * - Load settings from the environment (DATABASE_URL, Supabase endpoint, CORS, timeouts)
 * - Validate them up front (missing/invalid values fail startup)
 */
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub database_url: String,
    pub database_max_connections: u32,

    // Supabase Auth (GoTrue) is reached at `{supabase_url}/auth/v1/...`
    pub supabase_url: Url,
    pub supabase_api_key: String,

    pub upstream_timeout: Duration,
    pub request_timeout: Duration,

    // Empty means every origin is allowed.
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = match std::env::var("PORT") {
            Ok(s) => s.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => 8080,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let database_max_connections = parse_or("DATABASE_MAX_CONNECTIONS", 10)?;

        let supabase_url = std::env::var("SUPABASE_URL")
            .map_err(|_| ConfigError::Missing("SUPABASE_URL"))
            .and_then(|raw| Url::parse(raw.trim()).map_err(|_| ConfigError::Invalid("SUPABASE_URL")))?;

        let supabase_api_key = std::env::var("SUPABASE_API_KEY")
            .map_err(|_| ConfigError::Missing("SUPABASE_API_KEY"))?;
        if supabase_api_key.trim().is_empty() {
            return Err(ConfigError::Invalid("SUPABASE_API_KEY"));
        }

        let upstream_timeout = timeout_secs(
            "UPSTREAM_TIMEOUT_SECONDS",
            parse_or("UPSTREAM_TIMEOUT_SECONDS", 10)?,
        )?;
        let request_timeout = timeout_secs(
            "REQUEST_TIMEOUT_SECONDS",
            parse_or("REQUEST_TIMEOUT_SECONDS", 30)?,
        )?;

        let cors_allowed_origins = parse_origins(
            &std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
        );

        Ok(Self {
            addr,
            app_env,
            database_url,
            database_max_connections,
            supabase_url,
            supabase_api_key,
            upstream_timeout,
            request_timeout,
            cors_allowed_origins,
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        Err(_) => Ok(default),
    }
}

// Zero would disable the Postgres statement timeout and fail every upstream call.
fn timeout_secs(key: &'static str, secs: u64) -> Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::Invalid(key));
    }
    Ok(Duration::from_secs(secs))
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
