//! Fragment construction for a single diagram source.
//!
//! A fragment is one outer marker container holding three renderings of the
//! same diagram source: a dark-theme variant, a light-theme variant, and a
//! `<pre><code>` fallback shown when the Mermaid engine never loads. The
//! class names here (`mermaid-block`, `mermaid`, `dark`, `light`) are a
//! stable interface that custom themes select on.

use crate::escape::escape_html;

/// Opening marker for a diagram fragment.
///
/// Asset injection keys on this exact string to decide whether a page needs
/// the Mermaid style/script payload.
pub const MERMAID_BLOCK_START: &str = r#"<div class="mermaid-block">"#;

/// Closing marker for a diagram fragment.
pub const MERMAID_BLOCK_END: &str = "</div>";

/// Mermaid init directive selecting the dark visual theme.
const DARK_INIT: &str = r#"%%{init:{"theme":"dark"}}%%"#;

/// Mermaid init directive selecting the default (light) visual theme.
const LIGHT_INIT: &str = r#"%%{init:{"theme":"default"}}%%"#;

/// Build the HTML fragment for one diagram source.
///
/// The source is trimmed, HTML-escaped once, and embedded identically in all
/// three variants. Variant order is fixed (dark, light, fallback) but
/// consumers select by class, not position.
#[must_use]
pub fn mermaid_block(source: &str) -> String {
    let escaped = escape_html(source.trim());
    let dark = format!("<div class=\"mermaid dark\">{DARK_INIT}\n{escaped}</div>");
    let light = format!("<div class=\"mermaid light\">{LIGHT_INIT}\n{escaped}</div>");
    let fallback = format!(r#"<pre><code class="language-mermaid">{escaped}</code></pre>"#);
    format!("{MERMAID_BLOCK_START}{dark}{light}{fallback}{MERMAID_BLOCK_END}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_mermaid_block_structure() {
        let block = mermaid_block("A-->B");
        assert_eq!(
            block,
            "<div class=\"mermaid-block\">\
             <div class=\"mermaid dark\">%%{init:{\"theme\":\"dark\"}}%%\nA--&gt;B</div>\
             <div class=\"mermaid light\">%%{init:{\"theme\":\"default\"}}%%\nA--&gt;B</div>\
             <pre><code class=\"language-mermaid\">A--&gt;B</code></pre>\
             </div>"
        );
    }

    #[test]
    fn test_mermaid_block_trims_source() {
        let block = mermaid_block("\n  graph TD\n");
        assert_eq!(block.matches("graph TD").count(), 3);
        assert!(!block.contains("  graph TD"));
    }

    #[test]
    fn test_mermaid_block_source_appears_three_times() {
        let block = mermaid_block("A-->B");
        assert_eq!(block.matches("A--&gt;B").count(), 3);
    }

    #[test]
    fn test_mermaid_block_escapes_once() {
        let block = mermaid_block("A & B");
        assert_eq!(block.matches("A &amp; B").count(), 3);
        assert!(!block.contains("&amp;amp;"));
    }

    #[test]
    fn test_mermaid_block_escapes_structural_html() {
        let block = mermaid_block(r#"<script>alert("x")</script>"#);
        assert!(!block.contains("<script>"));
        assert!(block.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_mermaid_block_empty_source() {
        let block = mermaid_block("");
        assert!(block.starts_with(MERMAID_BLOCK_START));
        assert!(block.ends_with(MERMAID_BLOCK_END));
        assert!(block.contains(r#"<pre><code class="language-mermaid"></code></pre>"#));
    }

    #[test]
    fn test_variant_order_fixed() {
        let block = mermaid_block("A-->B");
        let dark = block.find("mermaid dark").unwrap();
        let light = block.find("mermaid light").unwrap();
        let fallback = block.find("<pre>").unwrap();
        assert!(dark < light);
        assert!(light < fallback);
    }
}
