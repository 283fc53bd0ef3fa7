//! Headless mode - NDJSON event output
//!
//! Runs one scan without the TUI and writes structured events to stdout, one
//! JSON object per line. Each event has an "event" field naming its type.
//!
//! ```json
//! {"event":"image_accepted","mime":"image/png","width":640,"height":480,"timestamp":1704700001000}
//! {"event":"phase_changed","from":"SCANNING","to":"ANALYZING","timestamp":1704700004000}
//! {"event":"analysis_completed","report_id":"K3J9Q0ZPL","analysis":{...},"timestamp":1704700007000}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use trichoscan_app::EngineEvent;
use trichoscan_core::HairAnalysis;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Image decoded and scan started
    ImageAccepted {
        mime: String,
        width: u32,
        height: u32,
        timestamp: i64,
    },

    /// Lifecycle phase moved
    PhaseChanged {
        from: String,
        to: String,
        timestamp: i64,
    },

    /// Analysis finished with a result
    AnalysisCompleted {
        report_id: String,
        analysis: HairAnalysis,
        timestamp: i64,
    },

    /// Analysis finished with a failure
    AnalysisFailed { reason: String, timestamp: i64 },

    /// User-facing notice (rejected file, export outcome)
    Notice { message: String, timestamp: i64 },

    /// Run could not complete
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Map an engine event onto its NDJSON form. `Shutdown` has none.
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        let mapped = match event {
            EngineEvent::PhaseChanged { old, new } => Self::PhaseChanged {
                from: old.label().to_string(),
                to: new.label().to_string(),
                timestamp,
            },
            EngineEvent::ImageAccepted {
                mime,
                width,
                height,
            } => Self::ImageAccepted {
                mime: mime.clone(),
                width: *width,
                height: *height,
                timestamp,
            },
            EngineEvent::AnalysisCompleted {
                report_id,
                analysis,
            } => Self::AnalysisCompleted {
                report_id: report_id.clone(),
                analysis: analysis.clone(),
                timestamp,
            },
            EngineEvent::AnalysisFailed { reason } => Self::AnalysisFailed {
                reason: reason.clone(),
                timestamp,
            },
            EngineEvent::NoticeRaised { message } => Self::Notice {
                message: message.clone(),
                timestamp,
            },
            EngineEvent::Shutdown => return None,
        };
        Some(mapped)
    }

    /// Event type label, matching the serialized "event" field
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ImageAccepted { .. } => "image_accepted",
            Self::PhaseChanged { .. } => "phase_changed",
            Self::AnalysisCompleted { .. } => "analysis_completed",
            Self::AnalysisFailed { .. } => "analysis_failed",
            Self::Notice { .. } => "notice",
            Self::Error { .. } => "error",
        }
    }
}
