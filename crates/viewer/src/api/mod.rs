//! JSONPlaceholder API client.
//!
//! Four independent read-only accessors over `reqwest`, one network
//! round-trip each. Failures are typed as [`ApiError`] here; the
//! orchestration layer decides whether to absorb them (it does, after
//! logging - see `app`).

mod error;
pub mod types;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use postboard_core::{PostId, UserId};

use crate::config::ViewerConfig;

pub use error::ApiError;
pub use types::{Comment, Company, Post, User};

/// Data-source seam over the four remote reads.
///
/// Implemented by [`PlaceholderClient`] for production and by in-memory
/// fakes in tests, so the render and orchestration layers never need a
/// network.
#[allow(async_fn_in_trait)]
pub trait PostApi {
    /// Fetch all users.
    async fn users(&self) -> Result<Vec<User>, ApiError>;

    /// Fetch a single user by ID.
    async fn user(&self, user_id: UserId) -> Result<User, ApiError>;

    /// Fetch all posts authored by a user.
    async fn user_posts(&self, user_id: UserId) -> Result<Vec<Post>, ApiError>;

    /// Fetch all comments on a post.
    async fn post_comments(&self, post_id: PostId) -> Result<Vec<Comment>, ApiError>;
}

/// Client for the remote posts API.
#[derive(Debug, Clone)]
pub struct PlaceholderClient {
    client: reqwest::Client,
    base: String,
}

impl PlaceholderClient {
    /// Create a new API client from the viewer configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(config: &ViewerConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base: config.api_base.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Build the URL for a resource path under the configured base.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base)
    }

    /// Perform one GET round-trip and decode the body as JSON.
    ///
    /// Reads the body as text first so decode failures can name the URL.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: Option<(&str, i32)>,
    ) -> Result<T, ApiError> {
        let mut request = self.client.get(&url);
        if let Some((name, value)) = query {
            request = request.query(&[(name, value)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        let body = response.text().await?;
        let decoded =
            serde_json::from_str(&body).map_err(|source| ApiError::Decode { url, source })?;
        Ok(decoded)
    }
}

impl PostApi for PlaceholderClient {
    #[instrument(skip(self))]
    async fn users(&self) -> Result<Vec<User>, ApiError> {
        let users: Vec<User> = self.get_json(self.endpoint("users"), None).await?;
        debug!(count = users.len(), "fetched users");
        Ok(users)
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn user(&self, user_id: UserId) -> Result<User, ApiError> {
        self.get_json(self.endpoint(&format!("users/{user_id}")), None)
            .await
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn user_posts(&self, user_id: UserId) -> Result<Vec<Post>, ApiError> {
        let posts: Vec<Post> = self
            .get_json(self.endpoint("posts"), Some(("userId", user_id.as_i32())))
            .await?;
        debug!(count = posts.len(), "fetched posts");
        Ok(posts)
    }

    #[instrument(skip(self), fields(post_id = %post_id))]
    async fn post_comments(&self, post_id: PostId) -> Result<Vec<Comment>, ApiError> {
        let comments: Vec<Comment> = self
            .get_json(self.endpoint("comments"), Some(("postId", post_id.as_i32())))
            .await?;
        debug!(count = comments.len(), "fetched comments");
        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base: &str) -> PlaceholderClient {
        PlaceholderClient {
            client: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let client = test_client("https://jsonplaceholder.typicode.com");
        assert_eq!(
            client.endpoint("users"),
            "https://jsonplaceholder.typicode.com/users"
        );
        assert_eq!(
            client.endpoint("users/3"),
            "https://jsonplaceholder.typicode.com/users/3"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash_in_base() {
        let client = test_client("https://example.com/");
        assert_eq!(client.endpoint("comments"), "https://example.com/comments");
    }
}
