//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the model, the unified message channel, the scan task set,
//! the analysis client and the shutdown signal. Both front ends drive it the
//! same way: feed messages into [`Engine::process_message`] and read state or
//! subscribe to [`EngineEvent`]s.

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::actions::ScanTaskSet;
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::services;
use crate::signals;
use crate::state::AppState;
use trichoscan_core::ScanPhase;
use trichoscan_vision::SharedAnalysisClient;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    phase: ScanPhase,
    notice_generation: u64,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            phase: state.phase,
            notice_generation: state.notice_generation(),
        }
    }
}

/// Orchestration engine for TrichoScan.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Timer and analysis tasks of the current scan
    pub scan_tasks: ScanTaskSet,

    /// Set to `true` by [`Engine::shutdown`]; the signal handler exits on it
    shutdown_tx: watch::Sender<bool>,

    signal_task: JoinHandle<()>,

    client: SharedAnalysisClient,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create an engine with the analysis client described by `settings`.
    pub fn new(settings: Settings) -> Self {
        let client = services::analysis_client_from_env(&settings.analysis);
        Self::with_client(settings, client)
    }

    /// Create an engine with an explicit analysis client.
    ///
    /// Creates the message channel (capacity 256), the shutdown channel and
    /// the event broadcaster, and spawns the signal handler. Must be called
    /// inside a tokio runtime.
    pub fn with_client(settings: Settings, client: SharedAnalysisClient) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (event_tx, _) = broadcast::channel(256);

        let signal_task = signals::spawn_signal_handler(msg_tx.clone(), shutdown_rx);

        info!(
            "Engine ready (analysis client: {}, dwell {} ms)",
            client.name(),
            state.settings.scan.dwell_ms
        );

        Self {
            state,
            msg_tx,
            msg_rx,
            scan_tasks: ScanTaskSet::new(),
            shutdown_tx,
            signal_task,
            client,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// EngineEvents for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.scan_tasks,
            &self.client,
        );

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn client_name(&self) -> &str {
        self.client.name()
    }

    /// Stop everything: abort scan tasks so no completion is delivered after
    /// teardown, and stop the signal handler.
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);

        let aborted = self.scan_tasks.abort_all();
        debug!("Shutdown aborted {} scan task(s)", aborted);

        self.shutdown_tx.send_replace(true);
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.phase != post.phase {
            self.emit(EngineEvent::PhaseChanged {
                old: pre.phase,
                new: post.phase,
            });

            match post.phase {
                ScanPhase::Scanning => {
                    if let Some(image) = &self.state.image {
                        self.emit(EngineEvent::ImageAccepted {
                            mime: image.mime_type().to_string(),
                            width: image.width(),
                            height: image.height(),
                        });
                    }
                }
                ScanPhase::Results => {
                    if let (Some(report_id), Some(analysis)) =
                        (&self.state.report_id, &self.state.analysis)
                    {
                        self.emit(EngineEvent::AnalysisCompleted {
                            report_id: report_id.clone(),
                            analysis: analysis.clone(),
                        });
                    }
                }
                ScanPhase::Error => {
                    self.emit(EngineEvent::AnalysisFailed {
                        reason: self
                            .state
                            .last_failure
                            .clone()
                            .unwrap_or_else(|| "unknown failure".to_string()),
                    });
                }
                ScanPhase::Idle | ScanPhase::Analyzing => {}
            }
        }

        if post.notice_generation != pre.notice_generation {
            if let Some(message) = &self.state.notice {
                self.emit(EngineEvent::NoticeRaised {
                    message: message.clone(),
                });
            }
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// send() returns Err only if there are no receivers.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
