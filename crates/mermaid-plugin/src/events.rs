//! Event payloads exchanged with the host pipeline.
//!
//! These mirror the mutable objects a documentation generator hands to its
//! hook handlers: a reflection model with comments and tags before
//! resolution, raw markdown text before parsing, and finalized page HTML.
//! Handlers receive each payload by mutable reference for the duration of
//! one dispatch and retain nothing afterward.

/// A named tag attached to a documentation comment (e.g. `@mermaid`,
/// `@example`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTag {
    /// Tag name without the leading `@`.
    pub name: String,
    /// Tag body text.
    pub text: String,
}

impl CommentTag {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A documentation comment attached to a documented symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    /// Summary text (the part before any tags).
    pub text: String,
    /// Tags in source order.
    pub tags: Vec<CommentTag>,
}

/// One documented symbol of any kind.
#[derive(Debug, Clone, Default)]
pub struct Reflection {
    /// Symbol name, used only for diagnostics.
    pub name: String,
    /// Attached documentation comment, if any.
    pub comment: Option<Comment>,
}

/// The traversable documentation model carried by the resolve-begin event.
#[derive(Debug, Clone, Default)]
pub struct ProjectModel {
    /// Every documented symbol, regardless of kind.
    pub reflections: Vec<Reflection>,
}

/// Payload of the markdown-parse event: raw markdown about to be rendered.
#[derive(Debug, Clone)]
pub struct MarkdownEvent {
    /// Mutable markdown text; handlers rewrite it in place.
    pub text: String,
}

/// Payload of the page-end event: one fully composed HTML page.
#[derive(Debug, Clone)]
pub struct PageEvent {
    /// Output page name, used only for diagnostics.
    pub name: String,
    /// Finalized page HTML. `None` when the host produced no content for
    /// this page; handlers skip such pages.
    pub contents: Option<String>,
}
