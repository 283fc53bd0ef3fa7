//! The analysis client seam

use std::sync::Arc;

use futures_util::future::{BoxFuture, FutureExt};
use trichoscan_core::prelude::*;
use trichoscan_core::{EncodedImage, HairAnalysis};

/// Converts an image into structured hair/scalp metrics.
///
/// Implementations own whatever they need to make the call, so the returned
/// future is `'static` and can be moved into a spawned task. Every failure
/// (network, status, malformed body) is reported as
/// [`Error::AnalysisFailed`].
pub trait AnalysisClient: Send + Sync {
    /// Analyze one image
    fn analyze(&self, image: EncodedImage) -> BoxFuture<'static, Result<HairAnalysis>>;

    /// Short name used in logs
    fn name(&self) -> &str;
}

/// Client handle shared between the engine and spawned analysis tasks
pub type SharedAnalysisClient = Arc<dyn AnalysisClient>;

/// Client used when no API key could be found.
///
/// The lifecycle still runs; every analysis fails with the configuration
/// problem as its reason.
#[derive(Debug, Clone)]
pub struct UnconfiguredClient {
    reason: String,
}

impl UnconfiguredClient {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl AnalysisClient for UnconfiguredClient {
    fn analyze(&self, _image: EncodedImage) -> BoxFuture<'static, Result<HairAnalysis>> {
        let reason = self.reason.clone();
        async move { Err(Error::analysis(reason)) }.boxed()
    }

    fn name(&self) -> &str {
        "unconfigured"
    }
}
