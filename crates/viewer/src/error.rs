//! Unified error handling for the viewer binary.
//!
//! Fetch failures never reach this type; they are logged and absorbed
//! inside the render pipeline. `AppError` covers the failures that should
//! abort startup: bad configuration, a client that cannot be built, and
//! output I/O.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// Application-level error type for the viewer.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The API client could not be constructed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Writing the rendered document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Config(ConfigError::InvalidEnvVar(
            "POSTBOARD_DEFAULT_USER".to_string(),
            "invalid digit".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid environment variable POSTBOARD_DEFAULT_USER: invalid digit"
        );
    }
}
