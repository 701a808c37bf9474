//! Host configuration parsed from environment variables.
//!
//! Required:
//! - `API_UPSTREAM_URL`: base URL of the backend serving `/api/*`
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `UPSTREAM_TIMEOUT_SECS`: per-request upstream timeout, default 30
//!
//! `main` loads a `.env` file first when one is present.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Upstream base URL without a trailing slash.
    pub api_upstream_url: String,
    pub upstream_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let upstream_timeout_secs =
            parse_or("UPSTREAM_TIMEOUT_SECS", lookup("UPSTREAM_TIMEOUT_SECS"), DEFAULT_UPSTREAM_TIMEOUT_SECS)?;

        let raw_upstream = lookup("API_UPSTREAM_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("API_UPSTREAM_URL"))?;
        let api_upstream_url = parse_upstream(&raw_upstream)?;

        Ok(Self { port, api_upstream_url, upstream_timeout_secs })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: value.to_owned() }),
    }
}

fn parse_upstream(raw: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::Invalid { var: "API_UPSTREAM_URL", value: raw.to_owned() };
    let url = reqwest::Url::parse(raw).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    Ok(raw.trim_end_matches('/').to_owned())
}
