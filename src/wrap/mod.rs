//! Proportional Word Wrap
//!
//! Greedy word wrapping driven by [`crate::metrics`] estimates. Works as a
//! stand-in for fixed-width wrapping when the output is set in a
//! proportional font.
//!
//! Accumulation happens in raw class units; the caller's width is converted
//! once up front, so a finished line measured with [`crate::metrics::length`]
//! lands close to the requested width.

use crate::metrics::{char_width, from_raw, to_raw};

/// Default line width, in average monospace units.
pub const DEFAULT_WIDTH: f64 = 75.0;

/// Default separator inserted between wrapped lines.
pub const DEFAULT_BREAK: &str = "\n";

/// Characters stripped from the ends of a word before it is placed.
///
/// Only ASCII blanks and NUL; Unicode spacing such as U+00A0 is word content.
const WORD_TRIM: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// A wrapped line together with where it ends in the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    /// Byte offset just past the last word placed on this line.
    pub end: usize,
}

/// Break `text` into lines no wider than `width`.
///
/// This is the only line-breaking pass in the crate; [`split`], [`wordwrap`]
/// and [`crate::ellipsis`] all go through it.
///
/// Behavior worth knowing about:
/// - A newline flushes `line + " " + word`, always inserting the space.
/// - A word left over at the end is appended as `" " + word`, even when the
///   line is otherwise empty.
/// - A single word wider than the limit gets a line of its own and is never
///   split; no empty line is emitted in front of it. Keep the `!line.is_empty()`
///   guard: without it an oversized first word is preceded by `""`, and zero
///   or negative widths no longer give exactly one word per line.
/// - Words are trimmed of ASCII blanks and NUL only, so no-break and other
///   Unicode spaces survive unchanged.
pub fn break_lines(text: &str, width: f64) -> Vec<Line> {
    let limit = to_raw(width);

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_w = 0.0;
    let mut line_end = 0;
    let mut word = String::new();
    let mut word_w = 0.0;

    for (i, c) in text.char_indices() {
        match c {
            ' ' => {
                let trimmed = word.trim_matches(WORD_TRIM);
                if !trimmed.is_empty() {
                    if line_w + word_w >= limit && !line.is_empty() {
                        log::trace!(
                            "Line {} full at byte {} ({:.1} wide)",
                            lines.len() + 1,
                            line_end,
                            from_raw(line_w)
                        );
                        lines.push(Line {
                            text: std::mem::take(&mut line),
                            end: line_end,
                        });
                        line.push_str(trimmed);
                        line_w = word_w;
                    } else {
                        if !line.is_empty() {
                            line.push(' ');
                        }
                        line.push_str(trimmed);
                        line_w += word_w;
                    }
                    line_end = i;
                }
                word.clear();
                word_w = 0.0;
            }
            '\n' => {
                lines.push(Line {
                    text: format!("{line} {word}"),
                    end: i,
                });
                line.clear();
                line_w = 0.0;
                word.clear();
                word_w = 0.0;
                line_end = i + 1;
            }
            _ => {
                word.push(c);
                word_w += char_width(c);
            }
        }
    }

    if !word.is_empty() {
        line.push(' ');
        line.push_str(&word);
        line_end = text.len();
    }

    if !line.is_empty() {
        lines.push(Line {
            text: line,
            end: line_end,
        });
    }

    log::debug!(
        "Broke {} bytes into {} lines at width {}",
        text.len(),
        lines.len(),
        width
    );

    lines
}

/// Proportional replacement for splitting text into fixed-width lines.
///
/// Empty input yields no lines. Words keep their content and order.
pub fn split(text: &str, width: f64) -> Vec<String> {
    break_lines(text, width)
        .into_iter()
        .map(|line| line.text)
        .collect()
}

/// Proportional word wrap: the lines of [`split`] joined with `line_break`.
///
/// With `line_break == " "` the original text comes back unchanged, as long
/// as it has at least two words, single spaces between words and no newlines.
pub fn wordwrap(text: &str, width: f64, line_break: &str) -> String {
    split(text, width).join(line_break)
}
