//! Centralized theme for the scanner UI.
//!
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions

pub mod palette;
pub mod styles;
