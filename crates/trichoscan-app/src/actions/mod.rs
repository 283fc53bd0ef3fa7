//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::message::Message;
use crate::UpdateAction;
use trichoscan_vision::SharedAnalysisClient;

mod files;
mod scan;

pub use files::{spawn_export_report, spawn_read_image_file};
pub use scan::{spawn_analysis, spawn_scan_timer};

/// Join handles of the timer and analysis tasks belonging to the current scan.
///
/// Cloning shares the same set. Aborting is best effort: a task that already
/// sent its message is unaffected, which is why completions also carry a
/// [`ScanToken`](trichoscan_core::ScanToken).
#[derive(Debug, Clone, Default)]
pub struct ScanTaskSet {
    handles: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl ScanTaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a task; finished handles are pruned on the way
    pub fn track(&self, handle: JoinHandle<()>) {
        let mut handles = self.lock();
        handles.retain(|h| !h.is_finished());
        handles.push(handle);
    }

    /// Abort every tracked task, returning how many were still running
    pub fn abort_all(&self) -> usize {
        let mut handles = self.lock();
        let running = handles.iter().filter(|h| !h.is_finished()).count();
        for handle in handles.drain(..) {
            handle.abort();
        }
        if running > 0 {
            debug!("Aborted {} scan task(s)", running);
        }
        running
    }

    /// Number of tracked tasks that have not finished
    pub fn active(&self) -> usize {
        self.lock().iter().filter(|h| !h.is_finished()).count()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.handles
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    scan_tasks: &ScanTaskSet,
    client: &SharedAnalysisClient,
) {
    match action {
        UpdateAction::StartScanTimer { token, dwell } => {
            scan_tasks.track(spawn_scan_timer(msg_tx, token, dwell));
        }

        UpdateAction::RunAnalysis {
            token,
            image,
            timeout,
        } => {
            scan_tasks.track(spawn_analysis(
                msg_tx,
                client.clone(),
                token,
                image,
                timeout,
            ));
        }

        UpdateAction::CancelScan => {
            scan_tasks.abort_all();
        }

        UpdateAction::ReadImageFile { path } => {
            spawn_read_image_file(msg_tx, path);
        }

        UpdateAction::ExportReport { report, dir } => {
            spawn_export_report(msg_tx, *report, dir);
        }
    }
}
