//! # trichoscan-core - Core Domain Types
//!
//! Foundation crate for TrichoScan. Provides the scan lifecycle, the analysis
//! result record, validated image payloads, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, image, base64).
//!
//! ## Public API
//!
//! ### Lifecycle (`lifecycle`)
//! - [`ScanPhase`] - The single active view state (Idle, Scanning, Analyzing, Results, Error)
//! - [`ScanEvent`] - Inputs that drive the phase forward
//! - [`ScanToken`] - Generation number tying async completions to the scan that started them
//!
//! ### Analysis (`analysis`)
//! - [`HairAnalysis`] - Structured metrics returned by the analysis service
//! - [`Metric`] - One labelled biometric score for display
//!
//! ### Images (`encoded_image`)
//! - [`EncodedImage`] - Image bytes that are known to decode, with MIME type and dimensions
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with convenience constructors
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait that logs error context at the failure site
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use trichoscan_core::prelude::*;
//! ```

pub mod analysis;
pub mod encoded_image;
pub mod error;
pub mod lifecycle;
pub mod logging;

/// Prelude for common imports used throughout all TrichoScan crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use analysis::{clamp_score, format_score, HairAnalysis, Metric, SCORE_MAX};
pub use error::{Error, Result, ResultExt};
pub use encoded_image::{has_accepted_extension, EncodedImage, ACCEPTED_EXTENSIONS};
pub use lifecycle::{ScanEvent, ScanPhase, ScanToken};
