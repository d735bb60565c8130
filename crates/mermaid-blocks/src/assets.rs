//! Style/script payload and per-page asset injection.
//!
//! Pages that contain at least one diagram fragment need two assets: a
//! stylesheet that decides which fragment variant is visible, and a script
//! that loads the Mermaid engine and marks diagrams as rendered. Both are
//! spliced into the final page HTML as plain strings; no HTML parsing is
//! performed, so malformed or repeated markers follow simple first/last
//! occurrence rules.

use std::borrow::Cow;

use crate::error::InjectError;
use crate::fragment::MERMAID_BLOCK_START;

/// Default CDN location of the Mermaid engine.
pub const DEFAULT_MERMAID_CDN: &str = "https://unpkg.com/mermaid/dist/mermaid.min.js";

const HEAD_CLOSE: &str = "</head>";
const BODY_CLOSE: &str = "</body>";

/// Stylesheet toggling visibility of the three fragment variants.
///
/// While `mermaid-enabled` is absent from the root element the fallback
/// `<pre>` stays visible and the diagram divs stay hidden. Once the script
/// adds the class, exactly one of the dark/light divs is shown, driven by
/// two custom properties that the media queries and explicit theme
/// classes/attributes override.
const STYLE: &str = r#"
<style>
:root.mermaid-enabled .mermaid-block > pre {
  display: none;
}
:root:not(.mermaid-enabled) .mermaid-block > .mermaid {
  display: none !important;
}

.mermaid-block > .mermaid[data-inserted].dark {
  display: var(--mermaid-dark-display);
}
.mermaid-block > .mermaid[data-inserted].light {
  display: var(--mermaid-light-display);
}

:root {
  --mermaid-dark-display: none;
  --mermaid-light-display: block;
}
@media (prefers-color-scheme: light) {
  :root {
    --mermaid-dark-display: none;
    --mermaid-light-display: block;
  }
}
@media (prefers-color-scheme: dark) {
  :root {
    --mermaid-dark-display: block;
    --mermaid-light-display: none;
  }
}
body.light, :root[data-theme="light"] {
  --mermaid-dark-display: none;
  --mermaid-light-display: block;
}
body.dark, :root[data-theme="dark"] {
  --mermaid-dark-display: block;
  --mermaid-light-display: none;
}
</style>
"#;

/// Inline bootstrap run after the engine `<script src=..>` tag.
///
/// Bails out if the engine global never appeared, marks the root as
/// mermaid-enabled, starts rendering, then polls one animation frame at a
/// time tagging each diagram div with `data-inserted` once it holds an SVG.
/// Polling ends on the first frame with no untagged diagrams left.
const SCRIPT_BODY: &str = r#"(function() {
  if (typeof mermaid === "undefined") {
    return;
  }

  document.documentElement.classList.add("mermaid-enabled");

  mermaid.initialize({startOnLoad:true});

  requestAnimationFrame(function check() {
    let some = false;
    document.querySelectorAll("div.mermaid:not([data-inserted])").forEach(div => {
      some = true;
      if (div.querySelector("svg")) {
        div.dataset.inserted = true;
      }
    });

    if (some) {
      requestAnimationFrame(check);
    }
  });
})();
"#;

/// Immutable style/script payload for page injection.
///
/// The script block is materialized once at construction; injection itself
/// is a pure function of the page text.
#[derive(Debug, Clone)]
pub struct PageAssets {
    script: String,
}

impl Default for PageAssets {
    fn default() -> Self {
        Self::new(DEFAULT_MERMAID_CDN)
    }
}

impl PageAssets {
    /// Build the payload, loading the Mermaid engine from `cdn_url`.
    #[must_use]
    pub fn new(cdn_url: &str) -> Self {
        Self {
            script: format!("\n<script src=\"{cdn_url}\"></script>\n<script>\n{SCRIPT_BODY}</script>\n"),
        }
    }

    /// The `<script>` payload injected before the last `</body>`.
    #[must_use]
    pub fn script(&self) -> &str {
        &self.script
    }

    /// The `<style>` payload injected before the first `</head>`.
    #[must_use]
    pub fn style(&self) -> &'static str {
        STYLE
    }

    /// Inject the payload into a fully rendered page.
    ///
    /// A page without a diagram fragment marker is returned borrowed and
    /// unchanged. Otherwise the style block is spliced before the first
    /// `</head>` and the script block before the last `</body>` of the
    /// style-modified document.
    ///
    /// # Errors
    ///
    /// [`InjectError::MissingHeadTag`] or [`InjectError::MissingBodyTag`]
    /// when the page needs assets but lacks the corresponding marker. The
    /// input is never partially modified on error.
    pub fn inject_assets<'a>(&self, html: &'a str) -> Result<Cow<'a, str>, InjectError> {
        if !html.contains(MERMAID_BLOCK_START) {
            return Ok(Cow::Borrowed(html));
        }

        let head_at = html.find(HEAD_CLOSE).ok_or(InjectError::MissingHeadTag)?;
        // Checked up front so a headless-body page fails without allocating.
        if !html.contains(BODY_CLOSE) {
            return Err(InjectError::MissingBodyTag);
        }

        let mut out = String::with_capacity(html.len() + STYLE.len() + self.script.len());
        out.push_str(&html[..head_at]);
        out.push_str(STYLE);
        out.push_str(&html[head_at..]);

        // Last occurrence in the style-modified document. STYLE contains no
        // </body>, so this is the same tag the original page ended with.
        let body_at = out.rfind(BODY_CLOSE).ok_or(InjectError::MissingBodyTag)?;
        out.insert_str(body_at, &self.script);

        Ok(Cow::Owned(out))
    }
}
