//! trichoscan-vision - Analysis client for TrichoScan
//!
//! This crate turns an [`EncodedImage`](trichoscan_core::EncodedImage) into a
//! [`HairAnalysis`](trichoscan_core::HairAnalysis) by calling an external AI
//! vision service. The scan lifecycle only sees the [`AnalysisClient`] trait;
//! every transport, status or parsing problem surfaces as
//! [`Error::AnalysisFailed`](trichoscan_core::Error::AnalysisFailed).
//!
//! ## Public API
//!
//! - [`AnalysisClient`] / [`SharedAnalysisClient`] - The client seam
//! - [`GeminiClient`] / [`GeminiConfig`] - Google Gemini `generateContent` implementation
//! - [`UnconfiguredClient`] - Stand-in used when no API key is available
//! - [`protocol`] - Request/response wire types and parsing

pub mod client;
pub mod gemini;
pub mod protocol;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{AnalysisClient, SharedAnalysisClient, UnconfiguredClient};
pub use gemini::{GeminiClient, GeminiConfig, DEFAULT_MODEL, DEFAULT_PROVIDER_URL};
