//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use crate::input_key::InputKey;
use trichoscan_core::{HairAnalysis, ScanToken};

/// All possible messages in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Text pasted into the terminal; only the Idle path prompt takes it
    PromptPaste(String),

    /// Tick event for periodic updates (scan-line animation)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Image Selection
    // ─────────────────────────────────────────────────────────
    /// Raw bytes of a chosen file. `None` means the selection was cancelled.
    SubmitImage { bytes: Option<Vec<u8>> },

    /// Load an image from disk and submit it
    OpenImageFile { path: PathBuf },

    /// Reading a selected file failed
    ImageFileUnreadable { path: PathBuf, error: String },

    // ─────────────────────────────────────────────────────────
    // Scan Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Dwell timer for `token` fired
    ScanTimerElapsed { token: ScanToken },

    /// The analysis call for `token` finished
    AnalysisSettled {
        token: ScanToken,
        outcome: Result<HairAnalysis, String>,
    },

    /// Discard the current image/result and return to Idle
    Reset,

    // ─────────────────────────────────────────────────────────
    // Report Export
    // ─────────────────────────────────────────────────────────
    /// Write the current result to the reports directory
    ExportReport,

    ReportExported { path: PathBuf },

    ReportExportFailed { error: String },
}
