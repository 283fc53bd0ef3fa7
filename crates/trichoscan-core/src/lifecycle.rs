//! Scan lifecycle: the phase value and its transition table
//!
//! The whole view is driven by a single [`ScanPhase`]. Phases only move in
//! response to a [`ScanEvent`]; [`ScanPhase::next`] is the complete table and
//! returns `None` for any event that is not defined in the current phase.
//!
//! ```text
//! Idle --ImageSubmitted--> Scanning --DwellElapsed--> Analyzing
//! Analyzing --AnalysisSucceeded--> Results
//! Analyzing --AnalysisFailed-----> Error
//! <any> --Reset--> Idle
//! ```

use serde::{Deserialize, Serialize};

/// The single active view state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScanPhase {
    /// Waiting for an image
    #[default]
    Idle,
    /// Simulated sensor calibration before the remote call
    Scanning,
    /// Waiting on the analysis service
    Analyzing,
    /// Analysis result available
    Results,
    /// Analysis service failed; only reset leaves this phase
    Error,
}

/// Inputs that move the lifecycle forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent {
    ImageSubmitted,
    DwellElapsed,
    AnalysisSucceeded,
    AnalysisFailed,
    Reset,
}

impl ScanPhase {
    /// Phase reached by applying `event`, or `None` if the event is not
    /// accepted in this phase.
    pub fn next(self, event: ScanEvent) -> Option<ScanPhase> {
        use ScanEvent as E;
        use ScanPhase as P;

        match (self, event) {
            (_, E::Reset) => Some(P::Idle),
            (P::Idle, E::ImageSubmitted) => Some(P::Scanning),
            (P::Scanning, E::DwellElapsed) => Some(P::Analyzing),
            (P::Analyzing, E::AnalysisSucceeded) => Some(P::Results),
            (P::Analyzing, E::AnalysisFailed) => Some(P::Error),
            _ => None,
        }
    }

    /// Scanning and Analyzing resolve on their own (timer / remote call)
    pub fn is_transient(&self) -> bool {
        matches!(self, ScanPhase::Scanning | ScanPhase::Analyzing)
    }

    /// Whether an image can be submitted in this phase
    pub fn can_submit(&self) -> bool {
        matches!(self, ScanPhase::Idle)
    }

    /// Whether the UI offers the reset control in this phase
    pub fn offers_reset(&self) -> bool {
        matches!(self, ScanPhase::Results | ScanPhase::Error)
    }

    /// Progress indicator shown next to the loading text
    pub fn progress_label(&self) -> Option<&'static str> {
        match self {
            ScanPhase::Scanning => Some("30%"),
            ScanPhase::Analyzing => Some("85%"),
            _ => None,
        }
    }

    /// Progress as a ratio for gauges
    pub fn progress_ratio(&self) -> f64 {
        match self {
            ScanPhase::Idle | ScanPhase::Error => 0.0,
            ScanPhase::Scanning => 0.30,
            ScanPhase::Analyzing => 0.85,
            ScanPhase::Results => 1.0,
        }
    }

    /// Upper-case label for status displays
    pub fn label(&self) -> &'static str {
        match self {
            ScanPhase::Idle => "IDLE",
            ScanPhase::Scanning => "SCANNING",
            ScanPhase::Analyzing => "ANALYZING",
            ScanPhase::Results => "RESULTS",
            ScanPhase::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for ScanPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Generation number minted for every accepted image.
///
/// Timer and analysis completions carry the token of the scan that started
/// them. Anything carrying a token other than the active one is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScanToken(pub u64);

impl ScanToken {
    /// The token following this one
    pub fn next(self) -> Self {
        ScanToken(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for ScanToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "scan#{}", self.0)
    }
}
