//! Text length, word-wrap and ellipsis for proportional fonts.
//!
//! Widths are approximations based on English letter frequency and the
//! average glyph widths of proportional fonts, expressed in units close to
//! monospace characters: 500 words of lorem ipsum (3,432 characters) measure
//! about 3,053, and wrap to 55 lines at width 60 where a fixed-width wrap
//! produces 60.
//!
//! ```
//! use proportional_text::{ellipsis, length, split};
//!
//! assert_eq!(length(""), 0.0);
//! assert!(split("", 40.0).is_empty());
//! assert!(ellipsis("short text", 75.0, 1).starts_with(r#"<span class="truncated">"#));
//! ```

pub mod common;
pub mod config;
pub mod ellipsis;
pub mod metrics;
pub mod service;
pub mod wrap;

pub use config::TextConfig;
pub use ellipsis::{ellipsis, truncate, Truncation};
pub use metrics::length;
pub use service::TextService;
pub use wrap::{split, wordwrap};
