//! Integration test support for Postboard.
//!
//! Provides [`FakeApi`], an in-memory implementation of the viewer's
//! `PostApi` seam, plus fixture builders, so the full
//! initialize / select / render / toggle pipeline runs without a network.
//!
//! # Test Categories
//!
//! - `end_to_end` - Full pipeline against canned data
//! - `render_pipeline` - Renderer composition and failure absorption

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashMap;

use postboard_core::{CommentId, PostId, UserId};
use postboard_viewer::api::{ApiError, Comment, Company, Post, PostApi, User};

/// In-memory data source for the viewer.
///
/// Lookups miss with a 404-style [`ApiError::Status`], matching what the
/// real API returns for unknown IDs. `fail_all` turns every operation into
/// an error, for exercising the absorption path.
#[derive(Debug, Default)]
pub struct FakeApi {
    users: Vec<User>,
    posts: HashMap<UserId, Vec<Post>>,
    comments: HashMap<PostId, Vec<Comment>>,
    fail_all: bool,
}

impl FakeApi {
    /// An empty data source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A data source whose every operation fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Add a user.
    #[must_use]
    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    /// Add a post under its author.
    #[must_use]
    pub fn with_post(mut self, post: Post) -> Self {
        self.posts.entry(post.user_id).or_default().push(post);
        self
    }

    /// Add a comment under its post.
    #[must_use]
    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments
            .entry(comment.post_id)
            .or_default()
            .push(comment);
        self
    }

}

fn failure(path: &str) -> ApiError {
    ApiError::Status {
        url: format!("fake://api/{path}"),
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn missing(path: &str) -> ApiError {
    ApiError::Status {
        url: format!("fake://api/{path}"),
        status: reqwest::StatusCode::NOT_FOUND,
    }
}

impl PostApi for FakeApi {
    async fn users(&self) -> Result<Vec<User>, ApiError> {
        if self.fail_all {
            return Err(failure("users"));
        }
        Ok(self.users.clone())
    }

    async fn user(&self, user_id: UserId) -> Result<User, ApiError> {
        if self.fail_all {
            return Err(failure(&format!("users/{user_id}")));
        }
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(|| missing(&format!("users/{user_id}")))
    }

    async fn user_posts(&self, user_id: UserId) -> Result<Vec<Post>, ApiError> {
        if self.fail_all {
            return Err(failure("posts"));
        }
        Ok(self.posts.get(&user_id).cloned().unwrap_or_default())
    }

    async fn post_comments(&self, post_id: PostId) -> Result<Vec<Comment>, ApiError> {
        if self.fail_all {
            return Err(failure("comments"));
        }
        Ok(self.comments.get(&post_id).cloned().unwrap_or_default())
    }
}

/// Build a user fixture.
#[must_use]
pub fn user(id: i32, name: &str, company: &str, catch_phrase: &str) -> User {
    User {
        id: UserId::new(id),
        name: name.to_string(),
        company: Company {
            name: company.to_string(),
            catch_phrase: catch_phrase.to_string(),
        },
    }
}

/// Build a post fixture.
#[must_use]
pub fn post(id: i32, user_id: i32, title: &str, body: &str) -> Post {
    Post {
        id: PostId::new(id),
        user_id: UserId::new(user_id),
        title: title.to_string(),
        body: body.to_string(),
    }
}

/// Build a comment fixture.
#[must_use]
pub fn comment(id: i32, post_id: i32, name: &str, body: &str, email: &str) -> Comment {
    Comment {
        id: CommentId::new(id),
        post_id: PostId::new(post_id),
        name: name.to_string(),
        body: body.to_string(),
        email: email.to_string(),
    }
}
