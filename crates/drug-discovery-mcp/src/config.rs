// Rust guideline compliant 2026-10-18

use std::time::Duration;

use drug_discovery::task::SYSTEM_USER_ID;
use thiserror::Error;

pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";
pub const ENV_SUPABASE_KEY: &str = "SUPABASE_KEY";
pub const ENV_USER_ID: &str = "DRUG_DISCOVERY_USER_ID";
pub const ENV_TIMEOUT_SECS: &str = "DRUG_DISCOVERY_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    #[error("{name} must be a positive number of seconds, got '{value}'")]
    InvalidTimeout { name: &'static str, value: String },
}

/// Runtime settings for the MCP server, read from the environment.
#[derive(Debug, Clone)]
pub struct McpConfig {
    pub supabase_url: String,
    pub supabase_key: String,
    /// Owner id stamped on every task the server creates.
    pub user_id: String,
    pub request_timeout: Duration,
}

impl McpConfig {
    /// Read the process environment. Call `dotenvy::dotenv()` first to
    /// pick up a local `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let supabase_url = get(ENV_SUPABASE_URL).ok_or(ConfigError::Missing(ENV_SUPABASE_URL))?;
        let supabase_key = get(ENV_SUPABASE_KEY).ok_or(ConfigError::Missing(ENV_SUPABASE_KEY))?;
        let user_id = get(ENV_USER_ID).unwrap_or_else(|| SYSTEM_USER_ID.to_string());

        let timeout_secs = match get(ENV_TIMEOUT_SECS) {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        name: ENV_TIMEOUT_SECS,
                        value: raw,
                    })
                }
            },
        };

        Ok(Self {
            supabase_url,
            supabase_key,
            user_id,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
