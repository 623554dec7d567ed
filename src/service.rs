//! Text Service
//!
//! Bundles the free functions behind a configured facade so callers set the
//! default width, line break and escaping once.

use crate::config::TextConfig;
use crate::ellipsis::{truncate, Truncation};
use crate::{metrics, wrap};

#[derive(Debug, Clone, Default)]
pub struct TextService {
    config: TextConfig,
}

impl TextService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    /// Estimated width in average monospace units.
    pub fn length(&self, text: &str) -> f64 {
        metrics::length(text)
    }

    /// Split at the configured width.
    pub fn split(&self, text: &str) -> Vec<String> {
        wrap::split(text, self.config.width)
    }

    pub fn split_width(&self, text: &str, width: f64) -> Vec<String> {
        wrap::split(text, width)
    }

    /// Wrap at the configured width, joining lines with the configured break.
    pub fn wordwrap(&self, text: &str) -> String {
        wrap::wordwrap(text, self.config.width, &self.config.line_break)
    }

    pub fn truncate(&self, text: &str, width: f64, max_lines: usize) -> Truncation {
        truncate(text, width, max_lines)
    }

    /// Ellipsis markup, escaped when the config asks for it.
    pub fn ellipsis(&self, text: &str, width: f64, max_lines: usize) -> String {
        truncate(text, width, max_lines).to_markup(self.config.escape_markup)
    }
}
