//! Viewer configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults point at the public
//! JSONPlaceholder instance.
//!
//! - `POSTBOARD_API_BASE` - Base URL of the posts API
//!   (default: `https://jsonplaceholder.typicode.com`)
//! - `POSTBOARD_DEFAULT_USER` - User selected when the change event carries
//!   no value (default: 1)
//! - `POSTBOARD_REQUEST_TIMEOUT_SECS` - Per-request timeout in seconds
//!   (default: 10)

use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use postboard_core::UserId;

/// Default remote API base URL.
const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com";

/// Default user selected when a change event carries no value.
const DEFAULT_USER_ID: i32 = 1;

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set to a value that does not parse.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Viewer application configuration.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Base URL of the posts API.
    pub api_base: Url,
    /// User selected when the change event carries no value.
    pub default_user: UserId,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl ViewerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base = match env::var("POSTBOARD_API_BASE") {
            Ok(raw) => Url::parse(&raw).map_err(|e| {
                ConfigError::InvalidEnvVar("POSTBOARD_API_BASE".to_string(), e.to_string())
            })?,
            Err(_) => default_api_base(),
        };

        let default_user = match env::var("POSTBOARD_DEFAULT_USER") {
            Ok(raw) => raw
                .parse::<i32>()
                .map(UserId::new)
                .map_err(|e| {
                    ConfigError::InvalidEnvVar("POSTBOARD_DEFAULT_USER".to_string(), e.to_string())
                })?,
            Err(_) => UserId::new(DEFAULT_USER_ID),
        };

        let request_timeout = match env::var("POSTBOARD_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map(Duration::from_secs).map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "POSTBOARD_REQUEST_TIMEOUT_SECS".to_string(),
                    e.to_string(),
                )
            })?,
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_base,
            default_user,
            request_timeout,
        })
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            default_user: UserId::new(DEFAULT_USER_ID),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// The compiled-in API base, known valid.
fn default_api_base() -> Url {
    Url::parse(DEFAULT_API_BASE).unwrap_or_else(|_| unreachable!("default API base is valid"))
}
