//! Error type for the remote API client.

use thiserror::Error;

/// Errors that can occur when fetching from the remote API.
///
/// The orchestration layer absorbs these into absence after logging; they
/// never surface to the rendered page.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The network request itself failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status code.
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display_names_url() {
        let err = ApiError::Status {
            url: "https://example.com/users".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("https://example.com/users"));
    }
}
