//! Application state (Model in TEA pattern)

use chrono::Utc;
use trichoscan_core::prelude::*;
use trichoscan_core::{EncodedImage, HairAnalysis, ScanEvent, ScanPhase, ScanToken};

use crate::config::Settings;
use crate::report::{generate_report_id, AnalysisReport};

/// Loading text before any scan has started
pub const LOADING_INITIAL: &str = "INITIALIZING";
/// Loading text while the dwell timer runs
pub const LOADING_SCANNING: &str = "CALIBRATING OPTICAL SENSORS...";
/// Loading text while the analysis call is in flight
pub const LOADING_ANALYZING: &str = "PROCESSING AI DATA...";

/// Complete application state (the Model in TEA).
///
/// Field invariants, maintained by the methods below:
/// - `analysis` and `report_id` are set exactly in `Results`
/// - `image` is set in every phase except `Idle`
/// - `active_scan` is set exactly in `Scanning` and `Analyzing`
#[derive(Debug)]
pub struct AppState {
    pub phase: ScanPhase,

    /// The accepted image
    pub image: Option<EncodedImage>,

    /// Result of the last successful analysis
    pub analysis: Option<HairAnalysis>,

    /// Transient status line shown while scanning
    pub loading_text: &'static str,

    /// Token of the scan whose completions are still wanted
    pub active_scan: Option<ScanToken>,

    /// Last minted token; the next scan uses its successor
    last_token: ScanToken,

    /// Shown in the results header and in exported reports
    pub report_id: Option<String>,

    /// User-visible one-line message (bad file, export outcome)
    pub notice: Option<String>,

    /// Bumped on every `set_notice`, so a repeated message still counts
    notice_seq: u64,

    /// Detailed reason of the last analysis failure (logged, not displayed)
    pub last_failure: Option<String>,

    /// Text typed into the image path prompt
    pub path_input: String,

    /// Scan-line animation frame, advanced on Tick while scanning
    pub scan_frame: u16,

    pub settings: Settings,

    quit_requested: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: ScanPhase::Idle,
            image: None,
            analysis: None,
            loading_text: LOADING_INITIAL,
            active_scan: None,
            last_token: ScanToken(0),
            report_id: None,
            notice: None,
            notice_seq: 0,
            last_failure: None,
            path_input: String::new(),
            scan_frame: 0,
            settings,
            quit_requested: false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Scan lifecycle
    // ─────────────────────────────────────────────────────────

    /// Store a decoded image and start scanning.
    ///
    /// Returns the token of the new scan, or `None` if the current phase does
    /// not accept a submission.
    pub fn accept_image(&mut self, image: EncodedImage) -> Option<ScanToken> {
        let next = self.phase.next(ScanEvent::ImageSubmitted)?;

        let token = self.last_token.next();
        self.last_token = token;

        info!(
            "Image accepted for {}: {} {}x{} ({})",
            token,
            image.mime_type(),
            image.width(),
            image.height(),
            image.size_label()
        );

        self.image = Some(image);
        self.active_scan = Some(token);
        self.notice = None;
        self.last_failure = None;
        self.path_input.clear();
        self.scan_frame = 0;
        self.loading_text = LOADING_SCANNING;
        self.phase = next;
        Some(token)
    }

    /// Dwell time for `token` elapsed: move to Analyzing.
    ///
    /// Returns the image to analyze, or `None` if the token is stale or the
    /// phase is not Scanning.
    pub fn begin_analysis(&mut self, token: ScanToken) -> Option<EncodedImage> {
        if !self.is_current(token) {
            debug!("Ignoring dwell timer for stale {}", token);
            return None;
        }
        let next = self.phase.next(ScanEvent::DwellElapsed)?;
        let image = self.image.clone()?;

        self.loading_text = LOADING_ANALYZING;
        self.phase = next;
        Some(image)
    }

    /// Apply the outcome of the analysis call for `token`.
    ///
    /// Returns `false` when the completion is stale and was ignored.
    pub fn settle_analysis(
        &mut self,
        token: ScanToken,
        outcome: std::result::Result<HairAnalysis, String>,
    ) -> bool {
        if !self.is_current(token) {
            debug!("Ignoring analysis result for stale {}", token);
            return false;
        }

        match outcome {
            Ok(analysis) => {
                let Some(next) = self.phase.next(ScanEvent::AnalysisSucceeded) else {
                    return false;
                };
                let report_id = generate_report_id();
                info!(
                    "Analysis complete for {} (report {}, overall {})",
                    token, report_id, analysis.overall_health_score
                );
                self.analysis = Some(analysis);
                self.report_id = Some(report_id);
                self.phase = next;
            }
            Err(reason) => {
                let Some(next) = self.phase.next(ScanEvent::AnalysisFailed) else {
                    return false;
                };
                error!("Analysis failed for {}: {}", token, reason);
                self.analysis = None;
                self.last_failure = Some(reason);
                self.phase = next;
            }
        }

        self.active_scan = None;
        true
    }

    /// Return to Idle, discarding the image and any result.
    ///
    /// Always succeeds; calling it twice has the same effect as once.
    pub fn reset(&mut self) {
        if self.phase != ScanPhase::Idle {
            debug!("Reset from {}", self.phase);
        }
        self.image = None;
        self.analysis = None;
        self.report_id = None;
        self.notice = None;
        self.last_failure = None;
        self.active_scan = None;
        self.scan_frame = 0;
        self.loading_text = LOADING_INITIAL;
        self.phase = self.phase.next(ScanEvent::Reset).unwrap_or(ScanPhase::Idle);
    }

    fn is_current(&self, token: ScanToken) -> bool {
        self.active_scan == Some(token)
    }

    // ─────────────────────────────────────────────────────────
    // Presentation helpers
    // ─────────────────────────────────────────────────────────

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        let notice = notice.into();
        debug!("Notice: {}", notice);
        self.notice = Some(notice);
        self.notice_seq = self.notice_seq.wrapping_add(1);
    }

    /// Number of notices raised so far
    pub fn notice_generation(&self) -> u64 {
        self.notice_seq
    }

    /// Advance the scan-line animation while a scan is running
    pub fn tick(&mut self) {
        if self.phase.is_transient() {
            self.scan_frame = self.scan_frame.wrapping_add(1);
        }
    }

    /// Snapshot of the current result for export
    pub fn report(&self) -> Option<AnalysisReport> {
        if self.phase != ScanPhase::Results {
            return None;
        }
        let image = self.image.as_ref()?;
        Some(AnalysisReport {
            report_id: self.report_id.clone()?,
            generated_at: Utc::now(),
            image_mime: image.mime_type().to_string(),
            image_bytes: image.byte_len(),
            analysis: self.analysis.clone()?,
        })
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }
}
