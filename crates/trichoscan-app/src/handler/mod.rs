//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per scan phase

pub(crate) mod keys;
pub(crate) mod update;


use std::path::PathBuf;
use std::time::Duration;

use crate::message::Message;
use crate::report::AnalysisReport;
use trichoscan_core::{EncodedImage, ScanToken};

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Sleep for the dwell time, then send `ScanTimerElapsed { token }`
    StartScanTimer { token: ScanToken, dwell: Duration },

    /// Call the analysis client, then send `AnalysisSettled { token, .. }`.
    /// A call that exceeds `timeout` settles as a failure.
    RunAnalysis {
        token: ScanToken,
        image: EncodedImage,
        timeout: Duration,
    },

    /// Abort every in-flight timer and analysis task
    CancelScan,

    /// Read an image file and submit its bytes
    ReadImageFile { path: PathBuf },

    /// Write a report as JSON into `dir`
    ExportReport {
        report: Box<AnalysisReport>,
        dir: PathBuf,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
