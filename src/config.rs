//! Default wrapping settings, loadable from JSON.

use eyre::{bail, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::wrap::{DEFAULT_BREAK, DEFAULT_WIDTH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Line width in average monospace units.
    pub width: f64,
    /// Separator placed between lines by `wordwrap`.
    pub line_break: String,
    /// HTML-escape text inside ellipsis markup.
    pub escape_markup: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            line_break: DEFAULT_BREAK.to_string(),
            escape_markup: false,
        }
    }
}

impl TextConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TextConfig =
            serde_json::from_str(json).wrap_err("Failed to parse text config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        log::debug!("Loading text config from {}", path.display());

        let json = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        Self::from_json_str(&json).wrap_err_with(|| format!("Invalid config in {}", path.display()))
    }

    /// Zero and negative widths are accepted (one word per line); NaN and
    /// infinities are not.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() {
            log::warn!("Rejecting text config with width {}", self.width);
            bail!("Width must be a finite number, got {}", self.width);
        }
        Ok(())
    }
}
