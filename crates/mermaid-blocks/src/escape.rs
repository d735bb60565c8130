//! Minimal HTML escaping for diagram source text.

/// Escape HTML special characters in text.
///
/// Escapes `&`, `<`, `>`, `"`, and `'` so diagram source can be embedded in
/// HTML without leaking structural markup. Applied exactly once per fragment;
/// callers must not pass already-escaped text.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
