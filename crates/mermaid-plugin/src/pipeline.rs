//! Abstract host-pipeline seam.
//!
//! A real documentation generator owns the event loop; this module models
//! just enough of it to register handlers and dispatch the three hooks in a
//! defined order. [`Pipeline`] doubles as the test host.

use crate::events::{MarkdownEvent, PageEvent, ProjectModel};

/// Handler interface with one method per hook.
///
/// All methods default to no-ops so a handler only implements the hooks it
/// cares about. Dispatch is single-threaded and strictly ordered; each
/// payload is mutated at most once per handler and never retained.
pub trait PipelineHandler {
    /// Fired once before the documentation model is finalized.
    fn resolve_begin(&mut self, _project: &mut ProjectModel) {}

    /// Fired for each chunk of markdown before the host's own renderer.
    fn parse_markdown(&mut self, _event: &mut MarkdownEvent) {}

    /// Fired once per rendered page after all content is composed.
    fn page_end(&mut self, _event: &mut PageEvent) {}

    /// Priority for the markdown-parse hook. Higher runs earlier; the
    /// host's built-in handlers sit at 0.
    fn markdown_priority(&self) -> i32 {
        0
    }
}

/// Minimal event dispatcher standing in for the host pipeline.
///
/// Handlers run in registration order, except for the markdown-parse hook
/// where descending [`markdown_priority`](PipelineHandler::markdown_priority)
/// wins (stable, so equal priorities keep registration order).
#[derive(Default)]
pub struct Pipeline {
    handlers: Vec<Box<dyn PipelineHandler>>,
}

impl Pipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for all three hooks.
    pub fn register(&mut self, handler: Box<dyn PipelineHandler>) {
        self.handlers.push(handler);
    }

    /// Dispatch the resolve-begin event to every handler.
    pub fn dispatch_resolve_begin(&mut self, project: &mut ProjectModel) {
        for handler in &mut self.handlers {
            handler.resolve_begin(project);
        }
    }

    /// Dispatch a markdown-parse event in descending priority order.
    pub fn dispatch_parse_markdown(&mut self, event: &mut MarkdownEvent) {
        let mut order: Vec<usize> = (0..self.handlers.len()).collect();
        order.sort_by_key(|&i| std::cmp::Reverse(self.handlers[i].markdown_priority()));
        for i in order {
            self.handlers[i].parse_markdown(event);
        }
    }

    /// Dispatch a page-end event to every handler.
    pub fn dispatch_page_end(&mut self, event: &mut PageEvent) {
        for handler in &mut self.handlers {
            handler.page_end(event);
        }
    }
}
