//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON; tests
//! use them to observe the lifecycle without polling state.

use trichoscan_core::{HairAnalysis, ScanPhase};

/// Domain events emitted by the Engine for external consumers.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// The scan phase changed
    PhaseChanged { old: ScanPhase, new: ScanPhase },

    /// A submitted file decoded and the scan started
    ImageAccepted {
        mime: String,
        width: u32,
        height: u32,
    },

    /// The analysis service returned a result
    AnalysisCompleted {
        report_id: String,
        analysis: HairAnalysis,
    },

    /// The analysis service failed; `reason` is the detailed cause
    AnalysisFailed { reason: String },

    /// A user-visible notice was set
    NoticeRaised { message: String },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PhaseChanged { .. } => "phase_changed",
            Self::ImageAccepted { .. } => "image_accepted",
            Self::AnalysisCompleted { .. } => "analysis_completed",
            Self::AnalysisFailed { .. } => "analysis_failed",
            Self::NoticeRaised { .. } => "notice",
            Self::Shutdown => "shutdown",
        }
    }
}
