//! Remote entity types for the JSONPlaceholder-style API.
//!
//! These records are read-only: the viewer decodes them and renders them,
//! never mutates or writes them back.

use serde::Deserialize;

use postboard_core::{CommentId, PostId, UserId};

/// An employee, the author of posts and a selection-menu entry.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// The user's company.
    pub company: Company,
}

/// A user's company.
#[derive(Debug, Clone, Deserialize)]
pub struct Company {
    /// Company name.
    pub name: String,
    /// Marketing catch phrase.
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
}

/// A post, belonging to exactly one user.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    /// Unique post ID.
    pub id: PostId,
    /// The authoring user.
    #[serde(rename = "userId")]
    pub user_id: UserId,
    /// Post title.
    pub title: String,
    /// Post body.
    pub body: String,
}

/// A comment, belonging to exactly one post.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    /// Unique comment ID.
    pub id: CommentId,
    /// The commented post.
    #[serde(rename = "postId")]
    pub post_id: PostId,
    /// Commenter display name.
    pub name: String,
    /// Comment body.
    pub body: String,
    /// Commenter email address.
    pub email: String,
}
