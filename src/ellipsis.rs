//! Ellipsis Truncation
//!
//! Cuts text down to a maximum number of wrapped lines and marks it up so a
//! stylesheet can show the visible part, an ellipsis, and optionally reveal
//! the rest.
//!
//! Line boundaries come from [`crate::wrap::break_lines`]; nothing here
//! measures text on its own.

use crate::common::format::{escape_markup, span};
use crate::wrap::break_lines;
use serde::Serialize;

pub const CLASS_TRUNCATED: &str = "truncated";
pub const CLASS_VISIBLE: &str = "truncated-visible";
pub const CLASS_ELLIPSIS: &str = "truncated-ellipsis";
pub const CLASS_INVISIBLE: &str = "truncated-invisible";

/// Text split into the part that fits and the part that does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Truncation {
    pub visible: String,
    /// Remainder of the source text, starting with the separator that
    /// preceded it. `None` when everything fits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invisible: Option<String>,
}

impl Truncation {
    pub fn is_truncated(&self) -> bool {
        self.invisible.is_some()
    }

    /// Render as nested `<span>` markup, optionally HTML-escaping the text.
    pub fn to_markup(&self, escape: bool) -> String {
        let text = |s: &str| {
            if escape {
                escape_markup(s)
            } else {
                s.to_string()
            }
        };

        let inner = match &self.invisible {
            Some(invisible) => {
                let visible = format!("{}{}", text(self.visible.as_str()), span(CLASS_ELLIPSIS, ""));
                format!(
                    "{}{}",
                    span(CLASS_VISIBLE, &visible),
                    span(CLASS_INVISIBLE, &text(invisible.as_str()))
                )
            }
            None => span(CLASS_VISIBLE, &text(self.visible.as_str())),
        };

        span(CLASS_TRUNCATED, &inner)
    }
}

/// Decide which part of `text` stays visible within `max_lines` lines of `width`.
///
/// The visible part is the first `max_lines` wrapped lines joined by single
/// spaces; the invisible part is whatever follows the last visible word in
/// the original text.
pub fn truncate(text: &str, width: f64, max_lines: usize) -> Truncation {
    let lines = break_lines(text, width);

    if lines.len() <= max_lines {
        return Truncation {
            visible: text.to_string(),
            invisible: None,
        };
    }

    let visible = lines
        .iter()
        .take(max_lines)
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let cut = max_lines
        .checked_sub(1)
        .and_then(|last| lines.get(last))
        .map_or(0, |line| line.end);

    log::debug!(
        "Truncated {} lines to {} (visible up to byte {})",
        lines.len(),
        max_lines,
        cut
    );

    Truncation {
        visible,
        invisible: Some(text.get(cut..).unwrap_or_default().to_string()),
    }
}

/// Truncate `text` to `max_lines` lines and render the ellipsis markup.
///
/// Text is inserted verbatim; use [`Truncation::to_markup`] to escape it.
pub fn ellipsis(text: &str, width: f64, max_lines: usize) -> String {
    truncate(text, width, max_lines).to_markup(false)
}
