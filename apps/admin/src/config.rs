//! Client configuration from environment variables.

use std::time::Duration;

use crate::error::{ClientError, Result};

/// Default access-token refresh interval (10 minutes).
pub const DEFAULT_REFRESH_SECS: u64 = 600;

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Login credentials for non-interactive use.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Admin client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API origin, without the `/api` suffix.
    pub api_url: String,
    pub refresh_interval: Duration,
    pub request_timeout: Duration,
    pub credentials: Option<Credentials>,
}

impl Config {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_SECS),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            credentials: None,
        }
    }

    /// Load configuration from the process environment.
    ///
    /// Env vars:
    /// - LINGUA_API_URL: API origin (falls back to VITE_API_URL)
    /// - LINGUA_REFRESH_SECS: token refresh interval, default 600
    /// - LINGUA_TIMEOUT_SECS: request timeout, default 30
    /// - LINGUA_EMAIL / LINGUA_PASSWORD: optional login credentials
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("LINGUA_API_URL")
            .or_else(|| lookup("VITE_API_URL"))
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ClientError::Config("LINGUA_API_URL not set".to_string()))?;

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ClientError::Config(format!(
                "LINGUA_API_URL must be an http(s) URL, got {}",
                api_url
            )));
        }

        let mut config = Self::new(api_url.trim());
        config.refresh_interval =
            Duration::from_secs(parse_secs(&lookup, "LINGUA_REFRESH_SECS", DEFAULT_REFRESH_SECS)?);
        config.request_timeout =
            Duration::from_secs(parse_secs(&lookup, "LINGUA_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?);

        config.credentials = match (lookup("LINGUA_EMAIL"), lookup("LINGUA_PASSWORD")) {
            (Some(email), Some(password)) => Some(Credentials { email, password }),
            _ => None,
        };

        Ok(config)
    }
}

fn parse_secs<F>(lookup: &F, key: &str, default: u64) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => match value.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(ClientError::Config(format!(
                "{} must be a positive number of seconds, got {}",
                key, value
            ))),
        },
    }
}
