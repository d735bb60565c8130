//! The Mermaid plugin: one [`PipelineHandler`] wiring the pure transforms
//! onto the host's hooks.

use std::borrow::Cow;

use mermaid_blocks::{PageAssets, transform_annotation, transform_fenced_blocks};

use crate::config::MermaidConfig;
use crate::events::{MarkdownEvent, PageEvent, ProjectModel};
use crate::pipeline::{Pipeline, PipelineHandler};

/// Markdown-parse priority; high enough to run before the host's built-in
/// parser so diagram source is never mangled by generic markdown handling.
pub const MARKDOWN_PRIORITY: i32 = 1000;

/// Documentation pipeline plugin rendering Mermaid blocks client-side.
///
/// Subscribes to three hooks:
/// 1. resolve-begin: rewrites fenced blocks in every comment summary and
///    tag, and whole-tag diagram annotations;
/// 2. markdown-parse (at [`MARKDOWN_PRIORITY`]): rewrites fenced blocks in
///    raw markdown before the default renderer sees it;
/// 3. page-end: injects the style/script payload into pages containing a
///    diagram fragment.
///
/// Holds no state across events beyond its immutable configuration.
#[derive(Debug)]
pub struct MermaidPlugin {
    annotation_tag: String,
    assets: PageAssets,
}

impl Default for MermaidPlugin {
    fn default() -> Self {
        Self::new(&MermaidConfig::default())
    }
}

impl MermaidPlugin {
    #[must_use]
    pub fn new(config: &MermaidConfig) -> Self {
        Self {
            annotation_tag: config.annotation_tag.clone(),
            assets: PageAssets::new(&config.cdn_url),
        }
    }

    /// Register this plugin on a pipeline.
    pub fn install(self, pipeline: &mut Pipeline) {
        pipeline.register(Box::new(self));
    }
}

impl PipelineHandler for MermaidPlugin {
    fn resolve_begin(&mut self, project: &mut ProjectModel) {
        for reflection in &mut project.reflections {
            let Some(comment) = reflection.comment.as_mut() else {
                continue;
            };
            comment.text = transform_fenced_blocks(&comment.text).into_owned();
            for tag in &mut comment.tags {
                if tag.name == self.annotation_tag {
                    tag.text = transform_annotation(&tag.text);
                } else {
                    tag.text = transform_fenced_blocks(&tag.text).into_owned();
                }
            }
        }
    }

    fn parse_markdown(&mut self, event: &mut MarkdownEvent) {
        event.text = transform_fenced_blocks(&event.text).into_owned();
    }

    fn page_end(&mut self, event: &mut PageEvent) {
        let Some(contents) = event.contents.as_mut() else {
            return;
        };
        match self.assets.inject_assets(contents) {
            Ok(Cow::Owned(injected)) => *contents = injected,
            Ok(Cow::Borrowed(_)) => {}
            Err(e) => {
                tracing::warn!(page = %event.name, error = %e, "Skipping mermaid asset injection");
            }
        }
    }

    fn markdown_priority(&self) -> i32 {
        MARKDOWN_PRIORITY
    }
}
