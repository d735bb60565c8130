//! Error type for asset injection.

use thiserror::Error;

/// Errors raised when injecting Mermaid assets into a rendered page.
///
/// Injection is pure string splicing against closing `</head>`/`</body>`
/// markers. A page that contains diagram fragments but lacks a marker is
/// reported as an error instead of being spliced at a guessed position.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InjectError {
    /// The page contains a diagram fragment but no closing `</head>` tag.
    #[error("page contains mermaid blocks but no closing </head> tag")]
    MissingHeadTag,

    /// The page contains a diagram fragment but no closing `</body>` tag.
    #[error("page contains mermaid blocks but no closing </body> tag")]
    MissingBodyTag,
}
