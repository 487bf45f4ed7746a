//! Owned element tree for the rendered page.
//!
//! The viewer does not drive a real browser document; it builds and mutates
//! its own tree of typed elements and serializes it to HTML text. The tree
//! is the single mutable surface of the application: one selection control
//! and one content container, both owned by [`Document`].

use std::collections::BTreeMap;
use std::fmt;

use postboard_core::PostId;

/// Attribute carrying the post identifier on buttons and comment sections.
pub const DATA_POST_ID: &str = "data-post-id";

/// Class that hides an element.
pub const HIDE_CLASS: &str = "hide";

/// Element kinds the viewer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tag {
    /// Paragraph, the default element kind.
    #[default]
    P,
    /// Second-level heading (post titles).
    H2,
    /// Third-level heading (comment names).
    H3,
    /// Comment-toggle button.
    Button,
    /// Comment section container.
    Section,
    /// Post or comment block.
    Article,
    /// Selection-menu entry.
    Option,
    /// The selection control.
    Select,
    /// The content container.
    Main,
}

impl Tag {
    /// The HTML tag name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::P => "p",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::Button => "button",
            Self::Section => "section",
            Self::Article => "article",
            Self::Option => "option",
            Self::Select => "select",
            Self::Main => "main",
        }
    }
}

/// A single element: tag, text content, classes, attributes, children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    tag: Tag,
    text: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element of the given kind.
    #[must_use]
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    /// Create a labeled element: the element builder.
    ///
    /// Defaults mirror the host-page conventions: a paragraph with empty
    /// text and no class. Pure factory, never fails.
    #[must_use]
    pub fn with_text(tag: Tag, text: impl Into<String>, class: Option<&str>) -> Self {
        let mut elem = Self::new(tag);
        elem.text = text.into();
        if let Some(class) = class {
            elem.add_class(class);
        }
        elem
    }

    /// The element kind.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    /// The element's own text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the element's text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the class is present.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Remove a class if present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// The class list, in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.insert(name.to_string(), value.into());
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Tag the element with a post identifier.
    pub fn set_post_id(&mut self, post_id: PostId) {
        self.set_attr(DATA_POST_ID, post_id.to_string());
    }

    /// The post identifier carried by this element, if any.
    #[must_use]
    pub fn post_id(&self) -> Option<PostId> {
        self.attr(DATA_POST_ID)
            .and_then(|v| v.parse::<i32>().ok())
            .map(PostId::new)
    }

    /// Append a child element.
    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Append a fragment's elements, preserving their order.
    pub fn append_fragment(&mut self, fragment: Fragment) {
        self.children.extend(fragment.children);
    }

    /// The child elements, in document order.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Remove all children, youngest first, returning how many were removed.
    pub fn clear_children(&mut self) -> usize {
        let mut removed = 0;
        while self.children.pop().is_some() {
            removed += 1;
        }
        removed
    }

    /// Find the first descendant (including self) matching the predicate.
    pub fn descendant_mut(&mut self, pred: &dyn Fn(&Element) -> bool) -> Option<&mut Element> {
        if pred(self) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Some(found) = child.descendant_mut(pred) {
                return Some(found);
            }
        }
        None
    }

    /// Collect all descendants (including self) matching the predicate, in
    /// document order.
    pub fn descendants<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if pred(self) {
            out.push(self);
        }
        for child in &self.children {
            child.descendants(pred, out);
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        write!(f, "{pad}<{}", self.tag.as_str())?;
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", escape(&self.classes.join(" ")))?;
        }
        for (name, value) in &self.attrs {
            write!(f, " {name}=\"{}\"", escape(value))?;
        }
        write!(f, ">")?;
        if self.children.is_empty() {
            write!(f, "{}", escape(&self.text))?;
        } else {
            writeln!(f)?;
            if !self.text.is_empty() {
                writeln!(f, "{pad}  {}", escape(&self.text))?;
            }
            for child in &self.children {
                child.fmt_indented(f, depth + 1)?;
                writeln!(f)?;
            }
            write!(f, "{pad}")?;
        }
        write!(f, "</{}>", self.tag.as_str())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

/// An ordered, detachable list of elements awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    children: Vec<Element>,
}

impl Fragment {
    /// Create an empty fragment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element to the fragment.
    pub fn append(&mut self, element: Element) {
        self.children.push(element);
    }

    /// The fragment's elements, in insertion order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.children
    }

    /// Number of elements in the fragment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the fragment is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// The page: one selection control and one content container.
///
/// Buttons and comment sections are located by the [`DATA_POST_ID`]
/// attribute, scoped to the content container. Exactly one section and one
/// button may carry a given post identifier.
#[derive(Debug, Clone)]
pub struct Document {
    select: Element,
    main: Element,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create the page skeleton: an empty selection control identified as
    /// `selectMenu` and an empty content container.
    #[must_use]
    pub fn new() -> Self {
        let mut select = Element::new(Tag::Select);
        select.set_attr("id", "selectMenu");
        Self {
            select,
            main: Element::new(Tag::Main),
        }
    }

    /// The selection control.
    #[must_use]
    pub const fn select(&self) -> &Element {
        &self.select
    }

    /// Mutable access to the selection control.
    pub const fn select_mut(&mut self) -> &mut Element {
        &mut self.select
    }

    /// The content container.
    #[must_use]
    pub const fn main(&self) -> &Element {
        &self.main
    }

    /// Mutable access to the content container.
    pub const fn main_mut(&mut self) -> &mut Element {
        &mut self.main
    }

    /// The comment section tagged with the given post identifier.
    pub fn comment_section_mut(&mut self, post_id: PostId) -> Option<&mut Element> {
        self.main
            .descendant_mut(&move |e| e.tag() == Tag::Section && e.post_id() == Some(post_id))
    }

    /// The toggle button tagged with the given post identifier.
    pub fn toggle_button_mut(&mut self, post_id: PostId) -> Option<&mut Element> {
        self.main
            .descendant_mut(&move |e| e.tag() == Tag::Button && e.post_id() == Some(post_id))
    }

    /// Every button inside the content container, in document order.
    #[must_use]
    pub fn buttons(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.main.descendants(&|e| e.tag() == Tag::Button, &mut out);
        out
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.select.fmt_indented(f, 0)?;
        writeln!(f)?;
        self.main.fmt_indented(f, 0)
    }
}

/// Escape text for HTML output.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
