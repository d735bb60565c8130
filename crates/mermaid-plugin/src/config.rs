//! Plugin configuration.

use serde::Deserialize;

use mermaid_blocks::DEFAULT_MERMAID_CDN;

/// Reserved tag name treated as a diagram annotation.
pub const MERMAID_TAG: &str = "mermaid";

/// Configuration for the Mermaid plugin.
///
/// All fields have production defaults; hosts typically deserialize this
/// from their own config file section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MermaidConfig {
    /// URL the injected script loads the Mermaid engine from.
    pub cdn_url: String,
    /// Comment tag name treated as a diagram annotation.
    pub annotation_tag: String,
}

impl Default for MermaidConfig {
    fn default() -> Self {
        Self {
            cdn_url: DEFAULT_MERMAID_CDN.to_owned(),
            annotation_tag: MERMAID_TAG.to_owned(),
        }
    }
}
