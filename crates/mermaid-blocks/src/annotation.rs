//! Annotation rewriting for `@mermaid` documentation tags.

use crate::fragment::mermaid_block;

/// Rewrite the text of a diagram annotation.
///
/// The first line of the text is a title; everything after it is raw diagram
/// source with no fence markers. The output is a level-4 markdown heading
/// followed by a blank line and the diagram fragment, so it can re-enter the
/// host's markdown rendering.
///
/// Empty text is not an error: it yields a bare heading and an empty
/// fragment.
#[must_use]
pub fn transform_annotation(text: &str) -> String {
    let title_len = text.find(['\n', '\r']).unwrap_or(text.len());
    let (title, source) = text.split_at(title_len);
    format!("#### {title}\n\n{}", mermaid_block(source))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_title_and_body() {
        let output = transform_annotation("Flow\nA-->B");

        assert!(output.starts_with("#### Flow\n\n"));
        assert_eq!(output.matches("A--&gt;B").count(), 3);
    }

    #[test]
    fn test_crlf_title() {
        let output = transform_annotation("Flow\r\nA-->B");
        assert!(output.starts_with("#### Flow\n\n"));
    }

    #[test]
    fn test_title_only() {
        let output = transform_annotation("Just a title");

        assert!(output.starts_with("#### Just a title\n\n"));
        assert!(output.contains(r#"<pre><code class="language-mermaid"></code></pre>"#));
    }

    #[test]
    fn test_empty_text() {
        let output = transform_annotation("");

        assert!(output.starts_with("#### \n\n"));
        assert!(output.contains(r#"<div class="mermaid-block">"#));
    }

    #[test]
    fn test_multiline_body() {
        let output = transform_annotation("Sequence\nsequenceDiagram\n  A->>B: hi");
        assert_eq!(output.matches("sequenceDiagram\n  A-&gt;&gt;B: hi").count(), 3);
    }
}
