//! Comment-toggle state machine and button bindings.
//!
//! Each post's comment section and toggle button form a two-state machine:
//! Hidden (initial) and Shown. Bindings live in an explicit map owned by
//! [`CommentPanels`] rather than being re-derived from the document, and
//! `unbind` removes exactly the registrations `bind` created, so a click
//! after unbinding is a no-op and rebinding never stacks handlers.

use std::collections::HashMap;

use postboard_core::PostId;

use crate::dom::{Document, Element, HIDE_CLASS};
use crate::render::{HIDE_COMMENTS, SHOW_COMMENTS};

/// Visibility state of a post's comment section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Comments hidden, button reads "Show Comments". The initial state.
    #[default]
    Hidden,
    /// Comments visible, button reads "Hide Comments".
    Shown,
}

/// A registered toggle handler for one post's button.
#[derive(Debug, Clone, Copy, Default)]
struct PanelBinding {
    state: PanelState,
}

/// A click on a post's toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// The post identifier carried by the clicked button.
    pub post_id: PostId,
    /// Set once a bound handler has processed the event.
    pub handled: bool,
}

impl ClickEvent {
    /// A fresh, unhandled click on the given post's button.
    #[must_use]
    pub const fn new(post_id: PostId) -> Self {
        Self {
            post_id,
            handled: false,
        }
    }
}

/// The binding registry: post identifier to toggle handler.
#[derive(Debug, Default)]
pub struct CommentPanels {
    bindings: HashMap<PostId, PanelBinding>,
}

impl CommentPanels {
    /// An empty registry with no bound buttons.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a toggle handler for every button inside the content
    /// container, in document order.
    ///
    /// Each button starts in the Hidden state. Returns the bound post
    /// identifiers (empty if the container holds no buttons).
    pub fn bind(&mut self, doc: &Document) -> Vec<PostId> {
        let mut bound = Vec::new();
        for button in doc.buttons() {
            if let Some(post_id) = button.post_id() {
                self.bindings.insert(post_id, PanelBinding::default());
                bound.push(post_id);
            }
        }
        bound
    }

    /// Remove every stored registration, returning the post identifiers
    /// that were bound.
    pub fn unbind(&mut self) -> Vec<PostId> {
        let mut ids: Vec<PostId> = self.bindings.drain().map(|(id, _)| id).collect();
        ids.sort_unstable();
        ids
    }

    /// Whether a toggle handler is registered for the post.
    #[must_use]
    pub fn is_bound(&self, post_id: PostId) -> bool {
        self.bindings.contains_key(&post_id)
    }

    /// Current panel state for a bound post.
    #[must_use]
    pub fn state(&self, post_id: PostId) -> Option<PanelState> {
        self.bindings.get(&post_id).map(|b| b.state)
    }

    /// Process a click on a post's toggle button.
    ///
    /// Hidden to Shown removes the hiding class from the section and sets
    /// the button label to "Hide Comments"; Shown to Hidden restores both.
    /// Marks the event handled and returns copies of the affected section
    /// and button. A click with no registration, or with the section or
    /// button missing from the document, is a no-op returning `None`.
    pub fn toggle(
        &mut self,
        event: &mut ClickEvent,
        doc: &mut Document,
        post_id: PostId,
    ) -> Option<(Element, Element)> {
        let binding = self.bindings.get_mut(&post_id)?;
        event.handled = true;

        let next = match binding.state {
            PanelState::Hidden => PanelState::Shown,
            PanelState::Shown => PanelState::Hidden,
        };

        // Confirm the button exists before flipping the section, so a
        // degenerate document is never half-toggled.
        doc.toggle_button_mut(post_id)?;

        let section = doc.comment_section_mut(post_id)?;
        match next {
            PanelState::Shown => section.remove_class(HIDE_CLASS),
            PanelState::Hidden => section.add_class(HIDE_CLASS),
        }
        let section = section.clone();

        let button = doc.toggle_button_mut(post_id)?;
        button.set_text(match next {
            PanelState::Shown => HIDE_COMMENTS,
            PanelState::Hidden => SHOW_COMMENTS,
        });
        let button = button.clone();

        binding.state = next;
        Some((section, button))
    }
}
