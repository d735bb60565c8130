//! Theme-aware HTML fragments for Mermaid diagram blocks.
//!
//! This crate provides the pure text transforms behind Mermaid support in
//! generated documentation:
//! - [`transform_fenced_blocks`]: rewrite fenced ```` ```mermaid ```` code
//!   blocks into self-contained HTML fragments
//! - [`transform_annotation`]: rewrite a `@mermaid` annotation (title line
//!   plus raw diagram source) into a heading and a fragment
//! - [`PageAssets`]: inject the shared style/script payload into pages that
//!   contain at least one fragment
//!
//! Every fragment carries a dark-theme variant, a light-theme variant, and a
//! `<pre><code>` fallback. Which one is visible is decided client-side by the
//! injected stylesheet, never by document order.
//!
//! All transforms are deterministic, perform no I/O, and hold no state across
//! calls.
//!
//! # Example
//!
//! ````
//! use mermaid_blocks::transform_fenced_blocks;
//!
//! let markdown = "Before\n```mermaid\nA-->B\n```\nAfter";
//! let html = transform_fenced_blocks(markdown);
//!
//! assert!(html.contains(r#"<div class="mermaid-block">"#));
//! assert!(!html.contains("```"));
//! ````

mod annotation;
mod assets;
mod error;
mod escape;
mod fence;
mod fragment;

pub use annotation::transform_annotation;
pub use assets::{DEFAULT_MERMAID_CDN, PageAssets};
pub use error::InjectError;
pub use escape::escape_html;
pub use fence::transform_fenced_blocks;
pub use fragment::{MERMAID_BLOCK_END, MERMAID_BLOCK_START, mermaid_block};
