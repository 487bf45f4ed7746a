//! Orchestration: sequencing fetch, render, and bind on load and on
//! selection change.
//!
//! [`App`] owns the document, the API client, and the button bindings, and
//! is the boundary where fetch errors are absorbed into absence. Outcome
//! structs carry the intermediate results of each sequence for diagnostics
//! and tests.

use tracing::{debug, info};

use postboard_core::{PostId, UserId};

use crate::api::{Post, PostApi, User};
use crate::controller::{ClickEvent, CommentPanels};
use crate::dom::{Document, Element, Fragment};
use crate::render;

/// A change of the selected employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged {
    /// The newly selected user, absent when the control carried no value.
    pub value: Option<UserId>,
}

/// An input event the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The selection control changed.
    SelectionChanged(SelectionChanged),
    /// A comment-toggle button was clicked.
    ButtonClick(ClickEvent),
}

/// Intermediate results of one post refresh, in execution order.
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    /// Post identifiers whose bindings were removed.
    pub unbound: Vec<PostId>,
    /// How many children were cleared from the content container.
    pub removed_children: usize,
    /// The content that was appended.
    pub rendered: Fragment,
    /// Post identifiers bound after the render.
    pub bound: Vec<PostId>,
}

/// Results of handling a selection change.
#[derive(Debug, Clone)]
pub struct SelectionOutcome {
    /// The user whose posts were requested.
    pub user_id: UserId,
    /// The fetched posts, absent on fetch failure.
    pub posts: Option<Vec<Post>>,
    /// The refresh results, absent when there were no posts to show.
    pub refresh: Option<RefreshOutcome>,
}

/// Result of dispatching one [`Event`].
#[derive(Debug, Clone)]
pub enum Dispatched {
    /// A selection change was handled.
    Selection(SelectionOutcome),
    /// A button click was handled; carries the toggled section and button,
    /// absent when the click had no registered handler.
    Click(Option<(Element, Element)>),
}

/// The page orchestrator.
pub struct App<C: PostApi> {
    api: C,
    doc: Document,
    panels: CommentPanels,
    default_user: UserId,
}

impl<C: PostApi> App<C> {
    /// Create the page with an empty selection control and the default
    /// placeholder in the content container.
    #[must_use]
    pub fn new(api: C, default_user: UserId) -> Self {
        let mut doc = Document::new();
        doc.main_mut().append(render::default_placeholder());
        Self {
            api,
            doc,
            panels: CommentPanels::new(),
            default_user,
        }
    }

    /// The rendered page.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.doc
    }

    /// The button binding registry.
    #[must_use]
    pub const fn panels(&self) -> &CommentPanels {
        &self.panels
    }

    /// Fetch all users and populate the selection control.
    ///
    /// Returns the fetched users (absent on failure) and the number of
    /// options appended.
    pub async fn initialize_page(&mut self) -> (Option<Vec<User>>, usize) {
        let users = render::absorb(self.api.users().await, "users");
        let appended = render::populate_select(&mut self.doc, users.as_deref())
            .map_or(0, |select| select.children().len());
        debug!(options = appended, "selection control populated");
        (users, appended)
    }

    /// Replace the content container's posts with the given ones.
    ///
    /// Unbinds button handlers, clears the container, renders the posts
    /// (awaited), and rebinds. Absent input is a no-op returning `None`
    /// with no document mutation.
    pub async fn refresh_posts(&mut self, posts: Option<Vec<Post>>) -> Option<RefreshOutcome> {
        let posts = posts?;
        let unbound = self.panels.unbind();
        let removed_children = self.doc.main_mut().clear_children();
        let rendered = render::render_posts(&self.api, &mut self.doc, Some(&posts)).await;
        let bound = self.panels.bind(&self.doc);
        Some(RefreshOutcome {
            unbound,
            removed_children,
            rendered,
            bound,
        })
    }

    /// Handle a change of the selected employee.
    ///
    /// Falls back to the configured default user when the event carries no
    /// value, fetches that user's posts, and refreshes the display.
    pub async fn on_selection_changed(&mut self, event: SelectionChanged) -> SelectionOutcome {
        let user_id = event.value.unwrap_or(self.default_user);
        let posts = render::absorb(self.api.user_posts(user_id).await, "posts");
        let refresh = self.refresh_posts(posts.clone()).await;
        info!(
            user_id = %user_id,
            posts = posts.as_ref().map_or(0, Vec::len),
            "selection change handled"
        );
        SelectionOutcome {
            user_id,
            posts,
            refresh,
        }
    }

    /// Handle a click on a comment-toggle button.
    pub fn on_button_click(&mut self, mut event: ClickEvent) -> Option<(Element, Element)> {
        let post_id = event.post_id;
        self.panels.toggle(&mut event, &mut self.doc, post_id)
    }

    /// Route an input event to its handler.
    pub async fn dispatch(&mut self, event: Event) -> Dispatched {
        match event {
            Event::SelectionChanged(change) => {
                Dispatched::Selection(self.on_selection_changed(change).await)
            }
            Event::ButtonClick(click) => Dispatched::Click(self.on_button_click(click)),
        }
    }

    /// Initialize the page and render the default user's posts.
    ///
    /// This is what the host runs once on startup: populate the selection
    /// control, then treat the default user as selected.
    pub async fn run_initial(&mut self) -> SelectionOutcome {
        self.initialize_page().await;
        self.on_selection_changed(SelectionChanged { value: None })
            .await
    }
}
