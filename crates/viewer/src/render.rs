//! Builders composing fetched records into the element tree.
//!
//! The pure builders map records to elements with no I/O. The async
//! builders additionally resolve each post's author and comments through
//! the [`PostApi`] seam, strictly one post at a time: the next post's
//! fetches only begin once the previous article is fully assembled, so the
//! visible order always matches the input order.

use tracing::error;

use postboard_core::PostId;

use crate::api::{ApiError, Comment, Post, PostApi, User};
use crate::dom::{Document, Element, Fragment, HIDE_CLASS, Tag};

/// Label of a toggle button whose comments are hidden.
pub const SHOW_COMMENTS: &str = "Show Comments";

/// Label of a toggle button whose comments are shown.
pub const HIDE_COMMENTS: &str = "Hide Comments";

/// Prompt shown before any employee has been selected.
const DEFAULT_PROMPT: &str = "Select an Employee to display their posts.";

/// Log a fetch failure and convert it into absence.
///
/// This is the single point where [`ApiError`] values are absorbed; past
/// here the rest of the pipeline only sees `Option`.
pub(crate) fn absorb<T>(result: Result<T, ApiError>, resource: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            error!(%error, resource, "fetch failed, rendering without it");
            None
        }
    }
}

/// Map each user to a selection-menu entry, preserving input order.
///
/// The option `value` is the user ID and the label is the user's name.
/// Absent input yields absent output.
#[must_use]
pub fn user_options(users: Option<&[User]>) -> Option<Vec<Element>> {
    let users = users?;
    let options = users
        .iter()
        .map(|user| {
            let mut option = Element::with_text(Tag::Option, user.name.clone(), None);
            option.set_attr("value", user.id.to_string());
            option
        })
        .collect();
    Some(options)
}

/// Append one option per user to the page's selection control.
///
/// Returns the populated control; no-op on absent input.
pub fn populate_select<'d>(doc: &'d mut Document, users: Option<&[User]>) -> Option<&'d Element> {
    let options = user_options(users)?;
    let select = doc.select_mut();
    for option in options {
        select.append(option);
    }
    Some(doc.select())
}

/// Build one comment block per comment, appended to a detachable fragment.
///
/// Each block is an article with three text elements in order: the
/// commenter's name, the body, and a "From: {email}" line.
#[must_use]
pub fn comments_fragment(comments: Option<&[Comment]>) -> Option<Fragment> {
    let comments = comments?;
    let mut fragment = Fragment::new();
    for comment in comments {
        let mut block = Element::new(Tag::Article);
        block.append(Element::with_text(Tag::H3, comment.name.clone(), None));
        block.append(Element::with_text(Tag::P, comment.body.clone(), None));
        block.append(Element::with_text(
            Tag::P,
            format!("From: {}", comment.email),
            None,
        ));
        fragment.append(block);
    }
    Some(fragment)
}

/// The placeholder paragraph the content container holds before the first
/// render and whenever there are no posts to show.
#[must_use]
pub fn default_placeholder() -> Element {
    Element::with_text(Tag::P, DEFAULT_PROMPT, Some("default-text"))
}

/// Build a post's comment section, initially hidden.
///
/// The section carries the post identifier in its [`crate::dom::DATA_POST_ID`]
/// attribute and the classes `comments` and `hide`. A failed comment fetch
/// leaves the section empty.
pub async fn comments_section<A: PostApi>(api: &A, post_id: PostId) -> Element {
    let mut section = Element::new(Tag::Section);
    section.set_post_id(post_id);
    section.add_class("comments");
    section.add_class(HIDE_CLASS);

    let comments = absorb(api.post_comments(post_id).await, "comments");
    if let Some(fragment) = comments_fragment(comments.as_deref()) {
        section.append_fragment(fragment);
    }
    section
}

/// Build one article per post, in input order, on a shared fragment.
///
/// Per post: heading, body, "Post ID" line, the author line and catch
/// phrase (skipped if the author fetch fails), the toggle button, and the
/// awaited comment section. Posts are processed sequentially; the author
/// and comment fetches for a post only start after the previous article is
/// complete.
pub async fn posts_fragment<A: PostApi>(api: &A, posts: &[Post]) -> Fragment {
    let mut fragment = Fragment::new();
    for post in posts {
        let mut article = Element::new(Tag::Article);
        article.append(Element::with_text(Tag::H2, post.title.clone(), None));
        article.append(Element::with_text(Tag::P, post.body.clone(), None));
        article.append(Element::with_text(
            Tag::P,
            format!("Post ID: {}", post.id),
            None,
        ));

        // Fresh author fetch per post, even for repeated authors.
        if let Some(author) = absorb(api.user(post.user_id).await, "author") {
            article.append(Element::with_text(
                Tag::P,
                format!("Author: {} with {}", author.name, author.company.name),
                None,
            ));
            article.append(Element::with_text(
                Tag::P,
                author.company.catch_phrase.clone(),
                None,
            ));
        }

        let mut button = Element::with_text(Tag::Button, SHOW_COMMENTS, None);
        button.set_post_id(post.id);
        article.append(button);

        article.append(comments_section(api, post.id).await);
        fragment.append(article);
    }
    fragment
}

/// Resolve the content to show and append it to the content container.
///
/// With posts this is the posts fragment; without, the default placeholder.
/// Returns a copy of the appended content.
pub async fn render_posts<A: PostApi>(
    api: &A,
    doc: &mut Document,
    posts: Option<&[Post]>,
) -> Fragment {
    let fragment = match posts {
        Some(posts) => posts_fragment(api, posts).await,
        None => {
            let mut fragment = Fragment::new();
            fragment.append(default_placeholder());
            fragment
        }
    };
    doc.main_mut().append_fragment(fragment.clone());
    fragment
}
