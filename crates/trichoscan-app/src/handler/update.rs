//! Main update function - handles state transitions (TEA pattern)

use std::path::{Path, PathBuf};

use trichoscan_core::prelude::*;
use trichoscan_core::{has_accepted_extension, EncodedImage, HairAnalysis, ScanToken};
use trichoscan_core::ACCEPTED_EXTENSIONS;

use super::{keys, UpdateAction, UpdateResult};
use crate::message::Message;
use crate::state::AppState;

/// Process a message and update state
/// Returns an UpdateResult with optional follow-up message and action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => keys::handle_key(state, key),

        Message::PromptPaste(text) => keys::handle_paste(state, &text),

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::SubmitImage { bytes } => handle_submit_image(state, bytes),

        Message::OpenImageFile { path } => handle_open_image_file(state, path),

        Message::ImageFileUnreadable { path, error } => {
            warn!("Failed to read {:?}: {}", path, error);
            state.set_notice(format!("Could not read {}: {}", path.display(), error));
            UpdateResult::none()
        }

        Message::ScanTimerElapsed { token } => handle_scan_timer_elapsed(state, token),

        Message::AnalysisSettled { token, outcome } => {
            handle_analysis_settled(state, token, outcome)
        }

        Message::Reset => {
            state.reset();
            UpdateResult::action(UpdateAction::CancelScan)
        }

        Message::ExportReport => match state.report() {
            Some(report) => UpdateResult::action(UpdateAction::ExportReport {
                report: Box::new(report),
                dir: state.settings.export.reports_dir(),
            }),
            None => {
                debug!("Export requested in {} with no result, ignoring", state.phase);
                UpdateResult::none()
            }
        },

        Message::ReportExported { path } => {
            info!("Report exported to {:?}", path);
            state.set_notice(format!("Report saved to {}", path.display()));
            UpdateResult::none()
        }

        Message::ReportExportFailed { error } => {
            error!("Report export failed: {}", error);
            state.set_notice(format!("Export failed: {}", error));
            UpdateResult::none()
        }
    }
}

fn handle_submit_image(state: &mut AppState, bytes: Option<Vec<u8>>) -> UpdateResult {
    let Some(bytes) = bytes else {
        debug!("Image selection cancelled");
        return UpdateResult::none();
    };

    if !state.phase.can_submit() {
        debug!("Ignoring image submitted during {}", state.phase);
        return UpdateResult::none();
    }

    let image = match EncodedImage::from_bytes(bytes) {
        Ok(image) => image,
        Err(e) => {
            warn!("Rejected submitted file: {}", e);
            state.set_notice(e.to_string());
            return UpdateResult::none();
        }
    };

    match state.accept_image(image) {
        Some(token) => UpdateResult::action(UpdateAction::StartScanTimer {
            token,
            dwell: state.settings.scan.dwell(),
        }),
        None => UpdateResult::none(),
    }
}

fn handle_open_image_file(state: &mut AppState, path: PathBuf) -> UpdateResult {
    if !state.phase.can_submit() {
        debug!("Ignoring file selection during {}", state.phase);
        return UpdateResult::none();
    }

    if !has_accepted_extension(&path) {
        state.set_notice(unsupported_file_notice(&path));
        return UpdateResult::none();
    }

    UpdateResult::action(UpdateAction::ReadImageFile { path })
}

fn unsupported_file_notice(path: &Path) -> String {
    format!(
        "Unsupported file type: {} (expected {})",
        path.display(),
        ACCEPTED_EXTENSIONS.join(", ")
    )
}

fn handle_scan_timer_elapsed(state: &mut AppState, token: ScanToken) -> UpdateResult {
    match state.begin_analysis(token) {
        Some(image) => UpdateResult::action(UpdateAction::RunAnalysis {
            token,
            image,
            timeout: state.settings.analysis.timeout(),
        }),
        None => UpdateResult::none(),
    }
}

fn handle_analysis_settled(
    state: &mut AppState,
    token: ScanToken,
    outcome: std::result::Result<HairAnalysis, String>,
) -> UpdateResult {
    state.settle_analysis(token, outcome);
    UpdateResult::none()
}
