//! Test doubles for the analysis client

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures_util::future::{BoxFuture, FutureExt};
use trichoscan_core::prelude::*;
use trichoscan_core::{EncodedImage, HairAnalysis};

use crate::client::AnalysisClient;

/// A plausible analysis with an overall score of 82
pub fn sample_analysis() -> HairAnalysis {
    HairAnalysis {
        density_score: 70.0,
        thickness_score: 64.0,
        hydration_score: 55.0,
        scalp_health_score: 80.0,
        overall_health_score: 82.0,
        condition: "Mild dryness".to_string(),
        detected_issues: vec!["Split ends".to_string(), "Light flaking".to_string()],
        recommendations: vec![
            "Weekly hydrating mask".to_string(),
            "Reduce heat styling".to_string(),
        ],
        technical_summary: "Follicular density within normal range; cuticle shows mild dehydration."
            .to_string(),
    }
}

/// Client that replays queued outcomes in order.
///
/// When the queue runs dry every call succeeds with [`sample_analysis`].
/// An optional delay is awaited before resolving, which lets tests with
/// paused tokio time hold a request in flight.
#[derive(Clone, Default)]
pub struct ScriptedClient {
    outcomes: Arc<Mutex<VecDeque<std::result::Result<HairAnalysis, String>>>>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn succeeding(analysis: HairAnalysis) -> Self {
        Self::new().then_ok(analysis)
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new().then_err(message)
    }

    pub fn then_ok(self, analysis: HairAnalysis) -> Self {
        self.push(Ok(analysis));
        self
    }

    pub fn then_err(self, message: impl Into<String>) -> Self {
        self.push(Err(message.into()));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `analyze` calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&self, outcome: std::result::Result<HairAnalysis, String>) {
        if let Ok(mut queue) = self.outcomes.lock() {
            queue.push_back(outcome);
        }
    }

    fn next_outcome(&self) -> std::result::Result<HairAnalysis, String> {
        self.outcomes
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .unwrap_or_else(|| Ok(sample_analysis()))
    }
}

impl AnalysisClient for ScriptedClient {
    fn analyze(&self, _image: EncodedImage) -> BoxFuture<'static, Result<HairAnalysis>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self.next_outcome();
        let delay = self.delay;

        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            outcome.map_err(Error::analysis)
        }
        .boxed()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
