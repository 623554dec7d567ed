//! Markup helpers shared by the ellipsis renderer.

/// Escape text for safe inclusion between HTML tags.
///
/// `&` must go first so already-produced entities are not mangled.
pub fn escape_markup(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render `<span class="{class}">{inner}</span>`.
pub fn span(class: &str, inner: &str) -> String {
    format!(r#"<span class="{class}">{inner}</span>"#)
}
