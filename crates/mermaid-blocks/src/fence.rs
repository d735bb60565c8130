//! Fenced-block rewriting for markdown text.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::fragment::mermaid_block;

/// Matches a fenced `mermaid` code block.
///
/// The opening fence is a line of exactly three backticks followed by the
/// literal (case-sensitive) tag `mermaid` and optional trailing whitespace;
/// the closing fence is a line of three backticks with optional trailing
/// whitespace. The body capture is non-greedy, so the first valid closing
/// fence wins and nesting is not supported.
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^```mermaid[ \t\r]*\n([\s\S]*?)^```[ \t]*$").unwrap());

/// Replace every fenced `mermaid` block in `text` with an HTML fragment.
///
/// Text outside matched blocks is left byte-identical; when nothing matches
/// the input is returned borrowed. A block with no closing fence is not a
/// match and stays literal text.
#[must_use]
pub fn transform_fenced_blocks(text: &str) -> Cow<'_, str> {
    FENCE_RE.replace_all(text, |caps: &Captures<'_>| mermaid_block(&caps[1]))
}
