//! Documentation pipeline plugin rendering Mermaid blocks client-side.
//!
//! This crate adapts the pure transforms from `mermaid-blocks` onto a host
//! documentation pipeline:
//! - [`events`]: the mutable payloads the host hands to hook handlers
//! - [`PipelineHandler`] / [`Pipeline`]: the abstract hook seam and a
//!   minimal dispatcher usable as a test host
//! - [`MermaidPlugin`]: the handler itself
//! - [`MermaidConfig`]: serde-deserializable configuration
//!
//! # Example
//!
//! ```
//! use mermaid_plugin::{MermaidConfig, MermaidPlugin, Pipeline};
//! use mermaid_plugin::events::MarkdownEvent;
//!
//! let mut pipeline = Pipeline::new();
//! MermaidPlugin::new(&MermaidConfig::default()).install(&mut pipeline);
//!
//! let mut event = MarkdownEvent {
//!     text: "see the diagram below".to_owned(),
//! };
//! pipeline.dispatch_parse_markdown(&mut event);
//! assert_eq!(event.text, "see the diagram below");
//! ```

mod config;
pub mod events;
mod pipeline;
mod plugin;

pub use config::{MERMAID_TAG, MermaidConfig};
pub use pipeline::{Pipeline, PipelineHandler};
pub use plugin::{MARKDOWN_PRIORITY, MermaidPlugin};

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::events::{Comment, CommentTag, MarkdownEvent, PageEvent, ProjectModel, Reflection};

    /// Full pass: resolve comments, parse markdown, finalize a page.
    #[test]
    fn test_end_to_end_dispatch() {
        let mut pipeline = Pipeline::new();
        MermaidPlugin::default().install(&mut pipeline);

        let mut project = ProjectModel {
            reflections: vec![Reflection {
                name: "Widget".to_owned(),
                comment: Some(Comment {
                    text: "Overview\n```mermaid\nA-->B\n```".to_owned(),
                    tags: vec![CommentTag::new("mermaid", "Flow\nB-->C")],
                }),
            }],
        };
        pipeline.dispatch_resolve_begin(&mut project);

        let comment = project.reflections[0].comment.as_ref().unwrap();
        assert!(comment.text.contains(r#"<div class="mermaid-block">"#));
        assert!(comment.tags[0].text.starts_with("#### Flow"));

        // The annotation output re-enters markdown parsing; the fragment it
        // contains has no fences, so a second pass is a no-op on it.
        let mut markdown = MarkdownEvent {
            text: comment.tags[0].text.clone(),
        };
        pipeline.dispatch_parse_markdown(&mut markdown);
        assert_eq!(markdown.text, comment.tags[0].text);

        let mut page = PageEvent {
            name: "widget.html".to_owned(),
            contents: Some(format!(
                "<html><head></head><body>{}</body></html>",
                comment.text
            )),
        };
        pipeline.dispatch_page_end(&mut page);

        let html = page.contents.unwrap();
        assert_eq!(html.matches("<style>").count(), 1);
        assert_eq!(html.matches("mermaid.initialize").count(), 1);
        assert!(html.rfind("</body>").unwrap() > html.find("mermaid.initialize").unwrap());
    }
}
